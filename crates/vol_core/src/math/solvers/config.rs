//! Solver configuration types.

use num_traits::Float;

/// Configuration for bracketing root searches.
///
/// Provides the settings shared across solver implementations: the
/// convergence tolerance and the iteration ceiling.
///
/// The tolerance is RELATIVE: a search stops once the bracket width has
/// shrunk below `rel_tolerance` scaled by the magnitude of the current
/// iterate (floored at unit scale, so brackets straddling zero still
/// terminate). The default is machine epsilon, which drives the bracket
/// down to the limit of the floating-point format rather than to a fixed
/// absolute width.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for the tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use vol_core::math::solvers::SolverConfig;
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.rel_tolerance, f64::EPSILON);
/// assert_eq!(config.max_iterations, 100_000);
///
/// // Custom configuration
/// let custom = SolverConfig {
///     rel_tolerance: 1e-12,
///     max_iterations: 200,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Relative bracket-width convergence tolerance.
    ///
    /// The search stops when the bracket half-width falls below
    /// `rel_tolerance * max(|x|, 1)` for the current iterate `x`.
    pub rel_tolerance: T,

    /// Iteration ceiling.
    ///
    /// A safety valve, not a correctness requirement: the tolerance
    /// criterion is expected to win far sooner for smooth monotonic
    /// objectives. Solvers that exhaust the ceiling report
    /// `converged = false` on their result instead of failing.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Create a default configuration.
    ///
    /// Default values:
    /// - `rel_tolerance`: machine epsilon for `T`
    /// - `max_iterations`: 100,000
    fn default() -> Self {
        Self {
            rel_tolerance: T::epsilon(),
            max_iterations: 100_000,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Arguments
    ///
    /// * `rel_tolerance` - Relative convergence tolerance (must be positive)
    /// * `max_iterations` - Iteration ceiling (must be > 0)
    ///
    /// # Panics
    ///
    /// Panics if `rel_tolerance <= 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use vol_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12, 200);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn new(rel_tolerance: T, max_iterations: usize) -> Self {
        assert!(
            rel_tolerance > T::zero(),
            "rel_tolerance must be positive"
        );
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            rel_tolerance,
            max_iterations,
        }
    }

    /// Create a configuration optimised for fast convergence.
    ///
    /// Uses a relaxed tolerance (1e-9) and a small ceiling (1,000) for
    /// latency-sensitive callers that do not need every last digit.
    pub fn fast() -> Self {
        Self {
            rel_tolerance: T::from(1e-9).unwrap(),
            max_iterations: 1_000,
        }
    }
}
