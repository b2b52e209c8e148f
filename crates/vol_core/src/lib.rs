//! # vol_core: Numerical Foundation for Volatility Analytics
//!
//! ## Layer 1 (Foundation) Role
//!
//! vol_core serves as the bottom layer of the workspace, providing:
//! - Derivative-free bracketing root finders (`math::solvers`)
//! - Solver configuration and outcome types (`math::solvers`)
//! - Error types: `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other vol_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Derived error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use vol_core::math::solvers::{BrentSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 in the bracket [0, 2]
//! let solver = BrentSolver::new(SolverConfig::default());
//! let f = |x: f64| x * x - 2.0;
//!
//! let result = solver.find_root(f, 0.0, 2.0).unwrap();
//! assert!(result.converged);
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `SolverConfig` and `SolverError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
