//! Black-Scholes pricing model for European vanilla options.
//!
//! This module provides closed-form pricing of European call and put
//! options under lognormal dynamics.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·Φ(d₁) - K·e^(-rt)·Φ(d₂)
//! **Put Price**: P = K·e^(-rt)·Φ(-d₂) - S·Φ(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)t) / (σ√t)
//! - d₂ = d₁ - σ√t

use num_traits::Float;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;

/// Side of a European vanilla option.
///
/// # Examples
/// ```
/// use vol_models::analytical::OptionType;
///
/// let kind = OptionType::Call;
/// assert!(kind.is_call());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Call option: right to buy at the strike
    Call,
    /// Put option: right to sell at the strike
    Put,
}

impl OptionType {
    /// Returns true for the call side.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }
}

/// Market parameters fixed for the duration of one pricing or inversion
/// call.
///
/// Volatility is deliberately NOT part of this type: it is the free
/// variable of the implied-volatility inversion and is passed per call.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use vol_models::analytical::MarketParams;
///
/// let params = MarketParams::new(100.0_f64, 110.0, 0.05, 1.0).unwrap();
/// assert_eq!(params.spot, 100.0);
///
/// // Non-positive spot is rejected
/// assert!(MarketParams::new(-100.0_f64, 110.0, 0.05, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParams<T: Float> {
    /// Spot price (S).
    pub spot: T,
    /// Strike price (K).
    pub strike: T,
    /// Risk-free rate (r), continuously compounded.
    pub rate: T,
    /// Time to expiry in years (t).
    pub expiry: T,
}

impl<T: Float> MarketParams<T> {
    /// Creates new market parameters with validation.
    ///
    /// # Arguments
    /// * `spot` - Spot price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `rate` - Risk-free rate (can be negative)
    /// * `expiry` - Time to expiry in years (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidStrike` if strike <= 0
    /// - `AnalyticalError::InvalidExpiry` if expiry <= 0
    pub fn new(spot: T, strike: T, rate: T, expiry: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if strike <= zero {
            return Err(AnalyticalError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if expiry <= zero {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            strike,
            rate,
            expiry,
        })
    }

    /// Returns the discount factor e^(-rt).
    #[inline]
    pub fn discount_factor(&self) -> T {
        (-self.rate * self.expiry).exp()
    }

    /// Returns the forward price F = S·e^(rt).
    #[inline]
    pub fn forward(&self) -> T {
        self.spot * (self.rate * self.expiry).exp()
    }
}

/// Black-Scholes model for European vanilla option pricing.
///
/// Holds validated market parameters and prices either side of the
/// contract for a caller-supplied volatility. Pre-computes √t and the
/// discount factor so repeated evaluations at different volatilities
/// (the implied-vol objective) stay cheap.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use vol_models::analytical::{BlackScholes, MarketParams, OptionType};
///
/// let params = MarketParams::new(100.0_f64, 100.0, 0.05, 1.0).unwrap();
/// let model = BlackScholes::new(params);
///
/// let call = model.price(OptionType::Call, 0.2).unwrap();
/// let put = model.price(OptionType::Put, 0.2).unwrap();
///
/// // Put-call parity: C - P = S - K·e^(-rt)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    params: MarketParams<T>,
    /// √t
    sqrt_t: T,
    /// e^(-rt)
    discount: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model from validated parameters.
    pub fn new(params: MarketParams<T>) -> Self {
        let sqrt_t = params.expiry.sqrt();
        let discount = params.discount_factor();
        Self {
            params,
            sqrt_t,
            discount,
        }
    }

    /// Returns a reference to the market parameters.
    #[inline]
    pub fn params(&self) -> &MarketParams<T> {
        &self.params
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)t) / (σ√t)
    ///
    /// The caller must supply `vol > 0`; [`BlackScholes::price`] enforces
    /// this before delegating here.
    #[inline]
    pub fn d1(&self, vol: T) -> T {
        let half = T::from(0.5).unwrap();

        let log_moneyness = (self.params.spot / self.params.strike).ln();
        let drift = (self.params.rate + half * vol * vol) * self.params.expiry;

        (log_moneyness + drift) / (vol * self.sqrt_t)
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√t
    #[inline]
    pub fn d2(&self, vol: T) -> T {
        self.d1(vol) - vol * self.sqrt_t
    }

    /// Computes the option price for the given side and volatility.
    ///
    /// # Arguments
    /// * `option_type` - Call or Put
    /// * `vol` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidVolatility` if vol <= 0; the
    ///   closed form divides by σ√t, so degenerate volatility is a
    ///   precondition violation rather than a recoverable input
    ///
    /// # Examples
    /// ```
    /// use vol_models::analytical::{BlackScholes, MarketParams, OptionType};
    ///
    /// let params = MarketParams::new(100.0_f64, 110.0, 0.05, 1.0).unwrap();
    /// let model = BlackScholes::new(params);
    ///
    /// let price = model.price(OptionType::Call, 0.2).unwrap();
    /// assert!(price > 0.0);
    ///
    /// assert!(model.price(OptionType::Call, 0.0).is_err());
    /// ```
    pub fn price(&self, option_type: OptionType, vol: T) -> Result<T, AnalyticalError> {
        if vol <= T::zero() {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: vol.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(self.price_raw(option_type, vol))
    }

    /// Computes European call option price.
    ///
    /// C = S·Φ(d₁) - K·e^(-rt)·Φ(d₂)
    #[inline]
    pub fn price_call(&self, vol: T) -> Result<T, AnalyticalError> {
        self.price(OptionType::Call, vol)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rt)·Φ(-d₂) - S·Φ(-d₁)
    #[inline]
    pub fn price_put(&self, vol: T) -> Result<T, AnalyticalError> {
        self.price(OptionType::Put, vol)
    }

    /// Price limit as σ → 0⁺: the discounted intrinsic value.
    ///
    /// - Call: max(S - K·e^(-rt), 0)
    /// - Put: max(K·e^(-rt) - S, 0)
    ///
    /// Together with [`BlackScholes::volatility_bound`] this brackets the
    /// range of prices the model can produce; a quote outside the range
    /// has no implied volatility.
    #[inline]
    pub fn intrinsic_bound(&self, option_type: OptionType) -> T {
        let zero = T::zero();
        let discounted_strike = self.params.strike * self.discount;
        match option_type {
            OptionType::Call => (self.params.spot - discounted_strike).max(zero),
            OptionType::Put => (discounted_strike - self.params.spot).max(zero),
        }
    }

    /// Price limit as σ → ∞.
    ///
    /// - Call: S
    /// - Put: K·e^(-rt)
    #[inline]
    pub fn volatility_bound(&self, option_type: OptionType) -> T {
        match option_type {
            OptionType::Call => self.params.spot,
            OptionType::Put => self.params.strike * self.discount,
        }
    }

    /// Unvalidated pricing kernel.
    ///
    /// `vol <= 0` evaluates to the σ → 0⁺ limit (the discounted
    /// intrinsic value), which keeps the implied-vol objective well
    /// defined at the lower bracket endpoint. The public [`BlackScholes::price`]
    /// rejects degenerate volatility instead.
    #[inline]
    pub(crate) fn price_raw(&self, option_type: OptionType, vol: T) -> T {
        if vol <= T::zero() {
            return self.intrinsic_bound(option_type);
        }

        let d1 = self.d1(vol);
        let d2 = self.d2(vol);
        let discounted_strike = self.params.strike * self.discount;

        match option_type {
            OptionType::Call => {
                // C = S·Φ(d₁) - K·e^(-rt)·Φ(d₂)
                self.params.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2)
            }
            OptionType::Put => {
                // P = K·e^(-rt)·Φ(-d₂) - S·Φ(-d₁)
                discounted_strike * norm_cdf(-d2) - self.params.spot * norm_cdf(-d1)
            }
        }
    }
}

/// Computes a European call price from raw inputs.
///
/// Convenience wrapper validating parameters and pricing in one call.
///
/// # Errors
/// - `AnalyticalError` if S, K, t, or σ violates its domain
///
/// # Examples
/// ```
/// use vol_models::analytical::call_price;
///
/// let price = call_price(100.0_f64, 110.0, 0.05, 1.0, 0.2).unwrap();
/// assert!((price - 6.040088).abs() < 1e-3);
/// ```
pub fn call_price<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    expiry: T,
    vol: T,
) -> Result<T, AnalyticalError> {
    let params = MarketParams::new(spot, strike, rate, expiry)?;
    BlackScholes::new(params).price(OptionType::Call, vol)
}

/// Computes a European put price from raw inputs.
///
/// # Errors
/// - `AnalyticalError` if S, K, t, or σ violates its domain
///
/// # Examples
/// ```
/// use vol_models::analytical::put_price;
///
/// let price = put_price(100.0_f64, 110.0, 0.05, 1.0, 0.2).unwrap();
/// assert!((price - 10.675325).abs() < 1e-3);
/// ```
pub fn put_price<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    expiry: T,
    vol: T,
) -> Result<T, AnalyticalError> {
    let params = MarketParams::new(spot, strike, rate, expiry)?;
    BlackScholes::new(params).price(OptionType::Put, vol)
}
