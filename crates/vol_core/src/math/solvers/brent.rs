//! Brent's method root-finding solver.

use super::{RootResult, SolverConfig};
use crate::types::SolverError;
use num_traits::Float;

/// Brent's method root finder.
///
/// Combines bisection, secant, and inverse quadratic interpolation for
/// robust root finding without requiring derivatives. The search never
/// evaluates the objective outside the maintained bracket, and the
/// bracket width is monotonically non-increasing across iterations, so
/// convergence is guaranteed for continuous functions with a valid
/// bracket.
///
/// Reaching the iteration ceiling is treated as a safety valve rather
/// than a failure: the solver returns the midpoint of the tightest
/// bracket it reached with `converged = false` on the [`RootResult`].
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use vol_core::math::solvers::{BrentSolver, SolverConfig};
///
/// let solver = BrentSolver::new(SolverConfig::default());
///
/// // Solve x³ - x - 2 = 0 in bracket [1, 2]
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let result = solver.find_root(f, 1.0, 2.0).unwrap();
/// assert!((f(result.root)).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BrentSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> BrentSolver<T> {
    /// Create a new Brent solver with the given configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use vol_core::math::solvers::{BrentSolver, SolverConfig};
    ///
    /// let solver: BrentSolver<f64> = BrentSolver::new(SolverConfig::fast());
    /// ```
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` in the bracket [a, b].
    ///
    /// Requires that `f(a)` and `f(b)` have opposite signs (a valid
    /// bracket) or that one endpoint is an exact root.
    ///
    /// The search converges once the bracket half-width falls below
    /// `rel_tolerance * max(|x|, 1)` for the current iterate `x`, and
    /// returns the midpoint of the final bracket as the point estimate.
    /// If the iteration ceiling is reached first, the current midpoint is
    /// returned with `converged = false`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find a root of
    /// * `a` - Left bracket endpoint
    /// * `b` - Right bracket endpoint
    ///
    /// # Returns
    ///
    /// * `Ok(RootResult)` - Point estimate plus convergence diagnostics
    /// * `Err(SolverError::NoBracket)` - `f(a)` and `f(b)` have same sign
    /// * `Err(SolverError::NumericalInstability)` - `f` produced a
    ///   non-finite value during the search
    ///
    /// # Example
    ///
    /// ```
    /// use vol_core::math::solvers::{BrentSolver, SolverConfig};
    ///
    /// let solver = BrentSolver::new(SolverConfig::default());
    ///
    /// // Solve x² - 2 = 0 in bracket [0, 2]
    /// let f = |x: f64| x * x - 2.0;
    ///
    /// let result = solver.find_root(f, 0.0, 2.0).unwrap();
    /// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-12);
    /// ```
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<RootResult<T>, SolverError>
    where
        F: Fn(T) -> T,
    {
        let zero = T::zero();
        let one = T::one();
        let half = T::from(0.5).unwrap();
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();

        let mut a = a;
        let mut b = b;
        let mut fa = f(a);
        let mut fb = f(b);

        if !fa.is_finite() || !fb.is_finite() {
            return Err(SolverError::NumericalInstability(format!(
                "objective is not finite at a bracket endpoint: f({}) = {}, f({}) = {}",
                a.to_f64().unwrap_or(f64::NAN),
                fa.to_f64().unwrap_or(f64::NAN),
                b.to_f64().unwrap_or(f64::NAN),
                fb.to_f64().unwrap_or(f64::NAN),
            )));
        }

        // An endpoint may already be an exact root.
        if fa == zero {
            return Ok(RootResult::converged(a, 0));
        }
        if fb == zero {
            return Ok(RootResult::converged(b, 0));
        }

        // Sign-change precondition
        if (fa > zero) == (fb > zero) {
            return Err(SolverError::NoBracket {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }

        // Invariant: [b, c] brackets the root and b is the best iterate.
        let mut c = a;
        let mut fc = fa;
        let mut d = b - a;
        let mut e = d;

        for iteration in 0..self.config.max_iterations {
            // Restore the sign-change invariant after the last step.
            if (fb > zero) == (fc > zero) {
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }
            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }

            let tol = self.config.rel_tolerance * b.abs().max(one);
            let xm = half * (c - b);

            if xm.abs() <= tol || fb == zero {
                // Midpoint of the final bracket is the point estimate.
                return Ok(RootResult::converged(b + xm, iteration));
            }

            if e.abs() >= tol && fa.abs() > fb.abs() {
                // Attempt interpolation: secant when only two distinct
                // points are available, inverse quadratic otherwise.
                let s = fb / fa;
                let mut p;
                let mut q;
                if a == c {
                    p = two * xm * s;
                    q = one - s;
                } else {
                    let r1 = fa / fc;
                    let r2 = fb / fc;
                    p = s * (two * xm * r1 * (r1 - r2) - (b - a) * (r2 - one));
                    q = (r1 - one) * (r2 - one) * (s - one);
                }
                if p > zero {
                    q = -q;
                }
                p = p.abs();

                let min1 = three * xm * q - (tol * q).abs();
                let min2 = (e * q).abs();
                if two * p < min1.min(min2) {
                    // Interpolated step stays within the bracket
                    e = d;
                    d = p / q;
                } else {
                    d = xm;
                    e = d;
                }
            } else {
                d = xm;
                e = d;
            }

            a = b;
            fa = fb;

            if d.abs() > tol {
                b = b + d;
            } else {
                // Minimum step, towards the far end of the bracket
                b = b + if xm > zero { tol } else { -tol };
            }

            fb = f(b);
            if !fb.is_finite() {
                return Err(SolverError::NumericalInstability(format!(
                    "objective is not finite at x = {}",
                    b.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        // Ceiling reached: best-effort midpoint of the current bracket.
        Ok(RootResult::best_effort(
            b + half * (c - b),
            self.config.max_iterations,
        ))
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
