//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Errors from root-finding solvers

use thiserror::Error;

/// Root-finding solver errors.
///
/// Provides structured error handling for bracketing root searches with
/// descriptive context for each failure mode. Exhausting the iteration
/// budget is deliberately NOT an error: bracketing solvers degrade to a
/// best-effort midpoint and report convergence through their result type.
///
/// # Variants
/// - `NoBracket`: Function values at bracket endpoints have same sign
/// - `NumericalInstability`: Objective produced a non-finite value
///
/// # Examples
/// ```
/// use vol_core::types::SolverError;
///
/// let err = SolverError::NoBracket { a: 0.0, b: 1.0 };
/// assert!(format!("{}", err).contains("same sign"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Objective evaluated to a non-finite value during the search.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_bracket_display() {
        let err = SolverError::NoBracket { a: 0.0, b: 1.0 };
        assert_eq!(
            format!("{}", err),
            "No bracket: f(0) and f(1) have same sign"
        );
    }

    #[test]
    fn test_numerical_instability_display() {
        let err = SolverError::NumericalInstability("objective returned NaN".to_string());
        assert_eq!(
            format!("{}", err),
            "Numerical instability: objective returned NaN"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SolverError::NoBracket { a: 0.0, b: 1.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = SolverError::NoBracket { a: 0.0, b: 1.0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
