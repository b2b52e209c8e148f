//! Root-finding solvers for numerical computation.
//!
//! This module provides derivative-free bracketing root finders designed
//! for financial applications such as implied-volatility inversion, where
//! the objective is smooth and monotonic but has no closed-form inverse.
//!
//! ## Available Solvers
//!
//! - [`BrentSolver`]: Robust bracketing method without derivative requirement
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `rel_tolerance`: Relative bracket-width convergence tolerance
//!   (default: machine epsilon)
//! - `max_iterations`: Iteration ceiling (default: 100,000)
//!
//! ## Outcome Reporting
//!
//! Searches return a [`RootResult`] carrying the point estimate together
//! with the iteration count and a `converged` flag. Hitting the iteration
//! ceiling is NOT a failure: the ceiling acts as a safety valve and the
//! solver hands back the midpoint of the tightest bracket it reached, with
//! `converged` set to `false` so callers can tell the two outcomes apart.
//!
//! ## Examples
//!
//! ```
//! use vol_core::math::solvers::{BrentSolver, SolverConfig};
//!
//! // Solve x³ - x - 2 = 0 in the bracket [1, 2]
//! let solver = BrentSolver::new(SolverConfig::default());
//! let f = |x: f64| x * x * x - x - 2.0;
//!
//! let result = solver.find_root(f, 1.0, 2.0).unwrap();
//! assert!(result.converged);
//! assert!(f(result.root).abs() < 1e-10);
//! ```

mod brent;
mod config;
mod result;

// Re-export public types at module level
pub use brent::BrentSolver;
pub use config::SolverConfig;
pub use result::RootResult;
