use stepwise_solvers::fixed_step;
use thiserror::Error;

use crate::{
    analysis::LengthMismatch,
    config::ConfigError,
    equation::{Equation, UnknownEquation},
    window::NoData,
};

/// Errors that can occur during a comparison run.
///
/// A run either produces a complete [`Report`](crate::Report) or fails with one
/// of these; there are no partial results.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    UnknownEquation(#[from] UnknownEquation),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The approximate and reference trajectories were not index-aligned.
    ///
    /// Both come from the same grid, so this indicates a bug rather than bad input.
    #[error("internal error: {0}")]
    LengthMismatch(#[from] LengthMismatch),

    #[error(transparent)]
    NoData(#[from] NoData),

    #[error("no closed-form solution is registered for {0}")]
    NoClosedForm(Equation),

    #[error("solver error: {0}")]
    Solver(#[from] fixed_step::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
