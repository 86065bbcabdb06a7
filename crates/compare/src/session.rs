//! Repeated runs that keep the previous top-error table for comparison.

use serde::Serialize;

use crate::{
    analysis::ErrorPoint,
    config::SimulationConfig,
    error::Error,
    run::{Report, run},
};

/// Holds the top errors of the last successful run.
///
/// A session starts empty. Each successful [`run`](Session::run) returns the
/// previous table alongside the new report and then replaces it. Failed runs
/// leave the session unchanged.
#[derive(Debug, Clone, Default)]
pub struct Session {
    previous: Option<Vec<ErrorPoint>>,
}

/// A report together with the top errors of the run before it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Top errors of the previous run, `None` for the first run of a session.
    pub previous: Option<Vec<ErrorPoint>>,

    pub report: Report,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the top errors retained from the last successful run.
    #[must_use]
    pub fn previous_top_errors(&self) -> Option<&[ErrorPoint]> {
        self.previous.as_deref()
    }

    /// Runs a comparison and retains its top errors for the next run.
    ///
    /// # Errors
    ///
    /// Returns the run's error; the retained table is not touched.
    pub fn run(&mut self, config: &SimulationConfig) -> Result<Comparison, Error> {
        let report = run(config)?;
        let previous = self.previous.replace(report.top_errors.clone());
        Ok(Comparison { previous, report })
    }

    /// Forgets the retained table.
    pub fn clear(&mut self) {
        self.previous = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Equation;

    fn config(dx: f64) -> SimulationConfig {
        SimulationConfig::new(Equation::DampedProduct, 1.0, 0.0, dx, 2.0)
    }

    #[test]
    fn first_run_has_no_previous() {
        let mut session = Session::new();

        let comparison = session.run(&config(0.01)).unwrap();

        assert!(comparison.previous.is_none());
        assert_eq!(
            session.previous_top_errors(),
            Some(comparison.report.top_errors.as_slice())
        );
    }

    #[test]
    fn second_run_sees_first_runs_table() {
        let mut session = Session::new();

        let first = session.run(&config(0.01)).unwrap();
        let second = session.run(&config(0.005)).unwrap();

        assert_eq!(second.previous, Some(first.report.top_errors));
        assert_ne!(second.report.top_errors, second.previous.clone().unwrap());
    }

    #[test]
    fn failed_run_keeps_previous_table() {
        let mut session = Session::new();
        let first = session.run(&config(0.01)).unwrap();

        assert!(session.run(&config(0.0)).is_err());

        assert_eq!(
            session.previous_top_errors(),
            Some(first.report.top_errors.as_slice())
        );
    }

    #[test]
    fn clear_forgets_table() {
        let mut session = Session::new();
        session.run(&config(0.01)).unwrap();

        session.clear();

        assert!(session.previous_top_errors().is_none());
        assert!(session.run(&config(0.01)).unwrap().previous.is_none());
    }
}
