//! Accuracy comparison of forward Euler against a reference solution.
//!
//! A run integrates `dy/dx = f(x, y)` for one of the registered [`Equation`]s
//! with forward Euler and with a [`Reference`] (classic Runge-Kutta or the
//! closed-form solution) on the same grid, then:
//!
//! - ranks the pointwise errors ([`analysis`]),
//! - selects a zoom window around the worst error ([`window`]),
//! - checks the maximum error against a tolerance ([`precision`]).
//!
//! The result is a [`Report`] of plain series and tables, ready for any
//! presentation layer. A [`Session`] keeps the previous run's top errors for
//! before/after comparison.
//!
//! # Example
//!
//! ```
//! use stepwise_compare::{Equation, SimulationConfig, run};
//!
//! let config = SimulationConfig::new(Equation::NegativeLinear, 1.0, 0.0, 0.001, 10.0);
//! let report = run(&config)?;
//!
//! assert_eq!(report.trial_count, 10_000);
//! assert_eq!(report.top_errors.len(), 5);
//! # Ok::<(), stepwise_compare::Error>(())
//! ```
//!
//! # Logging
//!
//! Runs log through the [`log`] facade: configuration at `debug`, grid size at
//! `trace`, and the verdict at `info` (or `warn` when it fails).

pub mod analysis;
pub mod precision;
pub mod window;

mod config;
mod equation;
mod error;
mod reference;
mod run;
mod session;

pub use config::{ConfigError, DEFAULT_STEP_SIZE, SimulationConfig};
pub use equation::{ClosedForm, Equation, UnknownEquation};
pub use error::Error;
pub use reference::Reference;
pub use run::{Report, label_decimals, run, trial_count};
pub use session::{Comparison, Session};
