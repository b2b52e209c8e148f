//! Error types for implied-volatility inversion.
//!
//! This module provides:
//! - `ImpliedVolError`: Failure taxonomy for the inversion

use thiserror::Error;
use vol_core::types::SolverError;

use crate::analytical::AnalyticalError;

/// Implied-volatility inversion errors.
///
/// # Variants
/// - `BracketingFailure`: The observed price lies outside the range the
///   model can produce over the search bracket, so the objective has no
///   sign change to localise
/// - `InvalidParams`: Market parameters violated their domain
/// - `Solver`: The underlying root finder failed for another reason
///
/// # Examples
/// ```
/// use vol_models::implied::ImpliedVolError;
///
/// let err = ImpliedVolError::BracketingFailure {
///     price: -1.0,
///     lower: 0.0,
///     upper: 100.0,
/// };
/// assert!(format!("{}", err).contains("outside attainable range"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImpliedVolError {
    /// Observed price cannot be reproduced by any volatility in the
    /// search bracket.
    #[error("Bracketing failure: price {price} outside attainable range [{lower}, {upper}]")]
    BracketingFailure {
        /// The observed price
        price: f64,
        /// Lowest attainable price (σ → 0⁺ limit)
        lower: f64,
        /// Highest attainable price (σ → ∞ limit)
        upper: f64,
    },

    /// Market parameters violated their domain.
    #[error("Invalid market parameters: {0}")]
    InvalidParams(#[from] AnalyticalError),

    /// The underlying root finder failed.
    #[error("Root search failed: {0}")]
    Solver(#[from] SolverError),
}
