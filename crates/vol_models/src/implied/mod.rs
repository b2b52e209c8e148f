//! Implied-volatility inversion for European vanilla options.
//!
//! The Black-Scholes price is strictly increasing in volatility but has
//! no closed-form inverse, so recovering the volatility consistent with
//! an observed market price is a root-finding problem: find σ with
//! price(σ) = observed. This module wraps the pricer as a scalar
//! objective of σ alone and localises the root with the derivative-free
//! bracketing solver from `vol_core`.
//!
//! This module provides:
//! - `ImpliedVolSolver`: Configurable inversion over a volatility bracket
//! - `ImpliedVol`: Estimate plus convergence diagnostics
//! - `ImpliedVolError`: Structured failure taxonomy
//! - `call_implied_volatility` / `put_implied_volatility`: One-shot
//!   convenience functions with default bracket and configuration
//!
//! ## Failure Semantics
//!
//! A quote outside the range the model can produce has no implied
//! volatility; the solver reports [`ImpliedVolError::BracketingFailure`]
//! rather than extrapolating or returning a boundary value. Exhausting
//! the iteration ceiling is NOT a failure: the estimate degrades to the
//! midpoint of the tightest bracket reached, with `converged = false`.

pub mod error;
pub mod solver;

// Re-export main types at module level
pub use error::ImpliedVolError;
pub use solver::{
    call_implied_volatility, put_implied_volatility, ImpliedVol, ImpliedVolSolver,
};
