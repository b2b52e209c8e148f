//! Numerical routines shared across the workspace.
//!
//! This module provides:
//! - `solvers`: Derivative-free bracketing root finders with configuration
//!   and outcome types

pub mod solvers;
