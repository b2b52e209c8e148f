//! Analytical pricing formulas for European vanilla options.
//!
//! This module provides closed-form Black-Scholes pricing:
//! - Validated market parameters (`MarketParams`)
//! - Call/put pricing under lognormal dynamics (`BlackScholes`)
//! - Standard normal distribution functions (`distributions`)
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f64` and `f32`
//! - **Validation at the boundary**: Degenerate inputs are rejected with
//!   structured errors before any formula is evaluated
//! - **Pure functions**: No shared state; every price is a deterministic
//!   function of its inputs

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{call_price, put_price, BlackScholes, MarketParams, OptionType};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
