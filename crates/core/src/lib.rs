//! Core traits and types for stepwise.
//!
//! This crate defines the shared abstractions that the fixed-step solvers and
//! the accuracy comparison build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output, used as
//!   the right-hand side `f(x, y)` of an ODE
//! - [`Slope`]: adapts a plain `Fn(f64, f64) -> f64` into a [`Model`]
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`Sample`], [`Trajectory`]: the `(x, y)` points a solver produces
//!
//! # Features
//!
//! - `serde` (default): derives `Serialize`/`Deserialize` for [`Sample`] and
//!   [`Trajectory`].

mod model;
mod observer;
mod sample;

pub use model::{Model, Slope};
pub use observer::Observer;
pub use sample::{Sample, Trajectory};
