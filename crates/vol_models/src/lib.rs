//! # Vol Models (L2: Analytics)
//!
//! Black-Scholes pricing and implied-volatility inversion for European
//! vanilla options.
//!
//! This crate provides:
//! - Closed-form Black-Scholes call/put pricing (`analytical`)
//! - Standard normal distribution functions (`analytical::distributions`)
//! - Validated market-parameter value types (`analytical`)
//! - Implied-volatility inversion via a derivative-free bracketing
//!   root search (`implied`)
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`** so `f64` and `f32` both work
//! - **Validated value types**: non-positive spot, strike, or expiry is
//!   rejected at construction, before any formula is evaluated
//! - **Best-effort inversion**: the solver's iteration ceiling is a
//!   safety valve; callers always learn whether the estimate converged
//!
//! ## Usage Example
//!
//! ```rust
//! use vol_models::analytical::{BlackScholes, MarketParams, OptionType};
//! use vol_models::implied::ImpliedVolSolver;
//!
//! let params = MarketParams::new(100.0_f64, 110.0, 0.05, 1.0).unwrap();
//! let model = BlackScholes::new(params);
//!
//! let price = model.price(OptionType::Call, 0.2).unwrap();
//!
//! let solver = ImpliedVolSolver::with_defaults();
//! let estimate = solver.solve(&model, OptionType::Call, price).unwrap();
//!
//! assert!(estimate.converged);
//! assert!((estimate.vol - 0.2).abs() < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod implied;
