//! Numerical solvers for stepwise.
//!
//! # Modules
//!
//! - [`fixed_step`]: forward Euler and classic fourth-order Runge-Kutta on a
//!   uniform grid `x0 + n·dx`

pub mod fixed_step;
