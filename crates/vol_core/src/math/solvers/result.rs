//! Root search outcome types.

use num_traits::Float;

/// Outcome of a bracketing root search.
///
/// Carries the point estimate together with diagnostics so callers can
/// distinguish a converged answer from a best-effort one produced when
/// the iteration ceiling was reached.
///
/// # Examples
/// ```
/// use vol_core::math::solvers::{BrentSolver, SolverConfig};
///
/// let solver = BrentSolver::new(SolverConfig::default());
/// let result = solver.find_root(|x: f64| x - 1.0, 0.0, 2.0).unwrap();
///
/// assert!(result.converged);
/// assert!((result.root - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootResult<T: Float> {
    /// Point estimate of the root: the midpoint of the final bracket.
    pub root: T,

    /// Number of iterations consumed by the search.
    pub iterations: usize,

    /// Whether the bracket-width tolerance was met within the iteration
    /// ceiling. `false` means `root` is the midpoint of the tightest
    /// bracket reached before the ceiling cut the search off.
    pub converged: bool,
}

impl<T: Float> RootResult<T> {
    /// Create a converged result.
    pub(crate) fn converged(root: T, iterations: usize) -> Self {
        Self {
            root,
            iterations,
            converged: true,
        }
    }

    /// Create a best-effort result after the iteration ceiling.
    pub(crate) fn best_effort(root: T, iterations: usize) -> Self {
        Self {
            root,
            iterations,
            converged: false,
        }
    }
}
