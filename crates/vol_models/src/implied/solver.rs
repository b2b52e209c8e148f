//! Implied-volatility solver built on the bracketing root finder.

use num_traits::Float;
use vol_core::math::solvers::{BrentSolver, SolverConfig};
use vol_core::types::SolverError;

use super::error::ImpliedVolError;
use crate::analytical::{BlackScholes, MarketParams, OptionType};

/// Default lower edge of the volatility search bracket.
const DEFAULT_BRACKET_LO: f64 = 0.0;

/// Default upper edge of the volatility search bracket.
///
/// 10.0 is 1000% annualised volatility; no realistic market regime
/// exceeds it. Callers pricing exotic regimes must widen the bracket via
/// [`ImpliedVolSolver::with_bracket`].
const DEFAULT_BRACKET_HI: f64 = 10.0;

/// Implied-volatility estimate with solver diagnostics.
///
/// The `converged` flag distinguishes a tolerance-met answer from a
/// best-effort midpoint produced when the iteration ceiling was reached.
///
/// # Examples
/// ```
/// use vol_models::analytical::{BlackScholes, MarketParams, OptionType};
/// use vol_models::implied::ImpliedVolSolver;
///
/// let params = MarketParams::new(100.0_f64, 110.0, 0.05, 1.0).unwrap();
/// let model = BlackScholes::new(params);
///
/// let solver = ImpliedVolSolver::with_defaults();
/// let estimate = solver
///     .solve(&model, OptionType::Call, 6.040088129724)
///     .unwrap();
///
/// assert!(estimate.converged);
/// assert!((estimate.vol - 0.2).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVol<T: Float> {
    /// Volatility point estimate: the midpoint of the final bracket.
    pub vol: T,

    /// Iterations consumed by the root search.
    pub iterations: usize,

    /// Whether the bracket-width tolerance was met within the iteration
    /// ceiling.
    pub converged: bool,
}

/// Implied-volatility solver for European vanilla options.
///
/// Wraps the Black-Scholes pricer as a scalar objective of volatility
/// alone, f(σ) = price(σ) - observed, and localises the root with
/// [`BrentSolver`] over a fixed search bracket. The objective is pure:
/// it closes over the model and the observed price, both read-only, so
/// the search is safe to run from any number of threads.
///
/// The observed price must be attainable: it has to lie between the
/// σ → 0⁺ limit (discounted intrinsic value) and the σ → ∞ limit
/// (spot for calls, discounted strike for puts). Quotes outside that
/// range produce [`ImpliedVolError::BracketingFailure`] rather than a
/// boundary value.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use vol_core::math::solvers::SolverConfig;
/// use vol_models::analytical::{BlackScholes, MarketParams, OptionType};
/// use vol_models::implied::ImpliedVolSolver;
///
/// let params = MarketParams::new(100.0_f64, 110.0, 0.05, 1.0).unwrap();
/// let model = BlackScholes::new(params);
/// let price = model.price(OptionType::Put, 0.35).unwrap();
///
/// let solver = ImpliedVolSolver::new(SolverConfig::default());
/// let estimate = solver.solve(&model, OptionType::Put, price).unwrap();
///
/// assert!((estimate.vol - 0.35).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver<T: Float> {
    bracket_lo: T,
    bracket_hi: T,
    config: SolverConfig<T>,
}

impl<T: Float> Default for ImpliedVolSolver<T> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<T: Float> ImpliedVolSolver<T> {
    /// Create a solver with the given root-search configuration and the
    /// default [0, 10] volatility bracket.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self {
            bracket_lo: T::from(DEFAULT_BRACKET_LO).unwrap(),
            bracket_hi: T::from(DEFAULT_BRACKET_HI).unwrap(),
            config,
        }
    }

    /// Create a solver with default configuration and bracket.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Replace the search bracket.
    ///
    /// # Panics
    ///
    /// Panics if `lo < 0` or `lo >= hi`.
    ///
    /// # Examples
    /// ```
    /// use vol_models::implied::ImpliedVolSolver;
    ///
    /// // Widen the ceiling for an exotic regime
    /// let solver: ImpliedVolSolver<f64> =
    ///     ImpliedVolSolver::with_defaults().with_bracket(0.0, 50.0);
    /// assert_eq!(solver.bracket(), (0.0, 50.0));
    /// ```
    pub fn with_bracket(mut self, lo: T, hi: T) -> Self {
        assert!(lo >= T::zero(), "volatility bracket must be non-negative");
        assert!(lo < hi, "bracket must satisfy lo < hi");
        self.bracket_lo = lo;
        self.bracket_hi = hi;
        self
    }

    /// Returns the search bracket as (lo, hi).
    pub fn bracket(&self) -> (T, T) {
        (self.bracket_lo, self.bracket_hi)
    }

    /// Returns a reference to the root-search configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Recover the volatility at which the model reproduces the observed
    /// price.
    ///
    /// # Arguments
    /// * `model` - Black-Scholes model holding the fixed market parameters
    /// * `option_type` - Call or Put
    /// * `observed_price` - Quoted price to invert
    ///
    /// # Returns
    ///
    /// * `Ok(ImpliedVol)` - Estimate plus convergence diagnostics. If the
    ///   iteration ceiling was reached first, `converged` is `false` and
    ///   the estimate is the midpoint of the tightest bracket reached.
    /// * `Err(ImpliedVolError::BracketingFailure)` - The observed price
    ///   lies outside the attainable range, or inside it but above what
    ///   the bracket ceiling can reproduce.
    ///
    /// # Examples
    /// ```
    /// use vol_models::analytical::{BlackScholes, MarketParams, OptionType};
    /// use vol_models::implied::{ImpliedVolError, ImpliedVolSolver};
    ///
    /// let params = MarketParams::new(100.0_f64, 110.0, 0.05, 1.0).unwrap();
    /// let model = BlackScholes::new(params);
    /// let solver = ImpliedVolSolver::with_defaults();
    ///
    /// // A negative quote has no implied volatility
    /// let result = solver.solve(&model, OptionType::Call, -1.0);
    /// assert!(matches!(
    ///     result,
    ///     Err(ImpliedVolError::BracketingFailure { .. })
    /// ));
    /// ```
    pub fn solve(
        &self,
        model: &BlackScholes<T>,
        option_type: OptionType,
        observed_price: T,
    ) -> Result<ImpliedVol<T>, ImpliedVolError> {
        let lower = model.intrinsic_bound(option_type);
        let upper = model.volatility_bound(option_type);

        // Attainability precondition: no volatility reproduces a quote
        // outside [lower, upper].
        if observed_price < lower || observed_price > upper {
            return Err(self.bracketing_failure(observed_price, lower, upper));
        }

        // Objective: f(σ) = price(σ) - observed. σ ≤ 0 evaluates to the
        // σ → 0⁺ limit so the lower bracket endpoint is well defined.
        let objective = |vol: T| model.price_raw(option_type, vol) - observed_price;

        let solver = BrentSolver::new(self.config);
        let result = solver
            .find_root(objective, self.bracket_lo, self.bracket_hi)
            .map_err(|err| match err {
                // The quote is attainable in the limit but not within the
                // bracket ceiling; surface it as a bracketing failure.
                SolverError::NoBracket { .. } => {
                    self.bracketing_failure(observed_price, lower, upper)
                }
                other => ImpliedVolError::Solver(other),
            })?;

        Ok(ImpliedVol {
            vol: result.root,
            iterations: result.iterations,
            converged: result.converged,
        })
    }

    fn bracketing_failure(&self, price: T, lower: T, upper: T) -> ImpliedVolError {
        ImpliedVolError::BracketingFailure {
            price: price.to_f64().unwrap_or(f64::NAN),
            lower: lower.to_f64().unwrap_or(f64::NAN),
            upper: upper.to_f64().unwrap_or(f64::NAN),
        }
    }
}

/// Recovers the implied volatility of a European call from raw inputs.
///
/// Uses the default [0, 10] bracket and default solver configuration.
///
/// # Errors
/// - `ImpliedVolError::InvalidParams` if S, K, or t violates its domain
/// - `ImpliedVolError::BracketingFailure` if the price is unattainable
///
/// # Examples
/// ```
/// use vol_models::implied::call_implied_volatility;
///
/// let vol = call_implied_volatility(100.0_f64, 110.0, 0.05, 1.0, 6.040088129724).unwrap();
/// assert!((vol - 0.2).abs() < 1e-3);
/// ```
pub fn call_implied_volatility<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    expiry: T,
    observed_price: T,
) -> Result<T, ImpliedVolError> {
    let params = MarketParams::new(spot, strike, rate, expiry)?;
    let model = BlackScholes::new(params);
    ImpliedVolSolver::with_defaults()
        .solve(&model, OptionType::Call, observed_price)
        .map(|estimate| estimate.vol)
}

/// Recovers the implied volatility of a European put from raw inputs.
///
/// Uses the default [0, 10] bracket and default solver configuration.
///
/// # Errors
/// - `ImpliedVolError::InvalidParams` if S, K, or t violates its domain
/// - `ImpliedVolError::BracketingFailure` if the price is unattainable
///
/// # Examples
/// ```
/// use vol_models::implied::put_implied_volatility;
///
/// let vol = put_implied_volatility(100.0_f64, 110.0, 0.05, 1.0, 10.675324824803).unwrap();
/// assert!((vol - 0.2).abs() < 1e-3);
/// ```
pub fn put_implied_volatility<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    expiry: T,
    observed_price: T,
) -> Result<T, ImpliedVolError> {
    let params = MarketParams::new(spot, strike, rate, expiry)?;
    let model = BlackScholes::new(params);
    ImpliedVolSolver::with_defaults()
        .solve(&model, OptionType::Put, observed_price)
        .map(|estimate| estimate.vol)
}
