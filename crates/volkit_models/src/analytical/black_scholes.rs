//! Black-Scholes pricing kernel for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·Φ(d₁) - K·e^(-rT)·Φ(d₂)
//! **Put Price**: P = K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Greeks carry the market quoting conventions as part of the
//! contract: vega and rho are per one percentage point (×0.01), theta
//! is per calendar day (÷365).

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;

/// Type of a vanilla European option.
///
/// A closed two-variant enumeration so the option-type domain is
/// exhaustive and checked by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Call option: right to buy at the strike.
    Call,
    /// Put option: right to sell at the strike.
    Put,
}

impl OptionType {
    /// Returns `true` for [`OptionType::Call`].
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionType::Call)
    }
}

/// The five standard sensitivities of an option price.
///
/// Scaling conventions (contractual, not incidental):
/// - `vega`: price change per 1 percentage-point volatility move
/// - `rho`: price change per 1 percentage-point rate move
/// - `theta`: price decay per calendar day
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T> {
    /// ∂price/∂S.
    pub delta: T,
    /// ∂²price/∂S², identical for calls and puts.
    pub gamma: T,
    /// ∂price/∂σ × 0.01, identical for calls and puts.
    pub vega: T,
    /// ∂price/∂t ÷ 365.
    pub theta: T,
    /// ∂price/∂r × 0.01.
    pub rho: T,
}

/// Validated Black-Scholes parameter set.
///
/// An immutable scalar value set; every operation is a stateless
/// evaluation of a closed-form expression, so values may be shared
/// across threads freely.
///
/// # Expiry-day convention
///
/// `expiry == 0` is accepted and treated by the standard financial
/// convention: the price collapses to intrinsic value, delta to the
/// exercise indicator, and the remaining Greeks to zero. Negative
/// expiry, and non-positive spot, strike, or volatility, are rejected
/// at construction.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (`f32` or `f64`)
///
/// # Examples
/// ```
/// use volkit_models::analytical::{BlackScholes, OptionType};
///
/// let bs = BlackScholes::new(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let call = bs.price(OptionType::Call);
/// let put = bs.price(OptionType::Put);
///
/// // Put-call parity: C - P = S - K·e^(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Strike price (K)
    strike: T,
    /// Time to expiry in years (T)
    expiry: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a validated parameter set.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `expiry` - Time to expiry in years (must be non-negative)
    /// * `rate` - Risk-free interest rate, annualised (any real)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - [`AnalyticalError::InvalidSpot`] if `spot <= 0`
    /// - [`AnalyticalError::InvalidStrike`] if `strike <= 0`
    /// - [`AnalyticalError::InvalidExpiry`] if `expiry < 0`
    /// - [`AnalyticalError::InvalidVolatility`] if `volatility <= 0`
    ///
    /// # Examples
    /// ```
    /// use volkit_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 100.0, 1.0, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 100.0, 1.0, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 100.0, 1.0, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: T, strike: T, expiry: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }

        if strike <= zero {
            return Err(AnalyticalError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(0.0),
            });
        }

        if expiry < zero {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(0.0),
            });
        }

        if volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the moneyness S/K.
    #[inline]
    pub fn moneyness(&self) -> T {
        self.spot / self.strike
    }

    #[inline]
    fn expiry_epsilon() -> T {
        T::from(1e-10).unwrap()
    }

    #[inline]
    fn at_expiry(&self) -> bool {
        self.expiry <= Self::expiry_epsilon()
    }

    /// d1 with an explicit volatility, shared with the implied-vol
    /// objective so repricing does not re-validate.
    #[inline]
    fn d1_with(&self, volatility: T) -> T {
        if self.at_expiry() {
            // At expiry d1 diverges; saturate by moneyness sign.
            let large = T::from(100.0).unwrap();
            return if self.spot > self.strike {
                large
            } else if self.spot < self.strike {
                -large
            } else {
                T::zero()
            };
        }

        let half = T::from(0.5).unwrap();
        let vol_sqrt_t = volatility * self.expiry.sqrt();

        let log_moneyness = (self.spot / self.strike).ln();
        let drift = (self.rate + half * volatility * volatility) * self.expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d₁ term: (ln(S/K) + (r + σ²/2)T) / (σ√T).
    ///
    /// At `expiry == 0` the term diverges; it is saturated to a
    /// large-magnitude value by moneyness sign (zero at-the-money).
    #[inline]
    pub fn d1(&self) -> T {
        self.d1_with(self.volatility)
    }

    /// Computes the d₂ term: d₁ - σ√T.
    #[inline]
    pub fn d2(&self) -> T {
        if self.at_expiry() {
            return self.d1();
        }
        self.d1() - self.volatility * self.expiry.sqrt()
    }

    /// Price with an explicit volatility. Backs the implied-vol
    /// objective; the parameter set has already been validated and the
    /// caller guarantees `volatility > 0`.
    #[inline]
    pub(crate) fn price_with(&self, volatility: T, option_type: OptionType) -> T {
        let zero = T::zero();

        if self.at_expiry() {
            let intrinsic = match option_type {
                OptionType::Call => self.spot - self.strike,
                OptionType::Put => self.strike - self.spot,
            };
            return if intrinsic > zero { intrinsic } else { zero };
        }

        let d1 = self.d1_with(volatility);
        let d2 = d1 - volatility * self.expiry.sqrt();
        let discount = (-self.rate * self.expiry).exp();

        match option_type {
            // C = S·Φ(d₁) - K·e^(-rT)·Φ(d₂)
            OptionType::Call => self.spot * norm_cdf(d1) - self.strike * discount * norm_cdf(d2),
            // P = K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁)
            OptionType::Put => self.strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1),
        }
    }

    /// Computes the option price.
    ///
    /// At `expiry == 0` the price is the intrinsic value.
    ///
    /// # Examples
    /// ```
    /// use volkit_models::analytical::{BlackScholes, OptionType};
    ///
    /// let bs = BlackScholes::new(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();
    /// assert!(bs.price(OptionType::Call) > 0.0);
    /// ```
    #[inline]
    pub fn price(&self, option_type: OptionType) -> T {
        self.price_with(self.volatility, option_type)
    }

    /// Computes Delta (∂price/∂S).
    ///
    /// - Call: Φ(d₁), in [0, 1]
    /// - Put: -Φ(-d₁), in [-1, 0]
    ///
    /// At `expiry == 0` delta is the exercise indicator.
    #[inline]
    pub fn delta(&self, option_type: OptionType) -> T {
        let zero = T::zero();
        let one = T::one();

        if self.at_expiry() {
            return match option_type {
                OptionType::Call => {
                    if self.spot > self.strike {
                        one
                    } else {
                        zero
                    }
                }
                OptionType::Put => {
                    if self.spot < self.strike {
                        -one
                    } else {
                        zero
                    }
                }
            };
        }

        let d1 = self.d1();
        match option_type {
            OptionType::Call => norm_cdf(d1),
            OptionType::Put => -norm_cdf(-d1),
        }
    }

    /// Computes Gamma (∂²price/∂S²): φ(d₁) / (S·σ·√T).
    ///
    /// Identical for calls and puts, always non-negative. Zero at
    /// `expiry == 0`.
    #[inline]
    pub fn gamma(&self) -> T {
        if self.at_expiry() {
            return T::zero();
        }

        let d1 = self.d1();
        norm_pdf(d1) / (self.spot * self.volatility * self.expiry.sqrt())
    }

    /// Computes Vega, scaled per 1 percentage-point volatility move:
    /// S·φ(d₁)·√T·0.01.
    ///
    /// Identical for calls and puts, always non-negative. Zero at
    /// `expiry == 0`.
    #[inline]
    pub fn vega(&self) -> T {
        if self.at_expiry() {
            return T::zero();
        }

        let scale = T::from(0.01).unwrap();
        let d1 = self.d1();
        self.spot * norm_pdf(d1) * self.expiry.sqrt() * scale
    }

    /// Computes Theta, scaled per calendar day (÷365).
    ///
    /// - Call: (-(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·Φ(d₂)) / 365
    /// - Put: (-(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·Φ(-d₂)) / 365
    ///
    /// Usually negative (time decay). Zero at `expiry == 0`.
    #[inline]
    pub fn theta(&self, option_type: OptionType) -> T {
        if self.at_expiry() {
            return T::zero();
        }

        let two = T::from(2.0).unwrap();
        let days = T::from(365.0).unwrap();

        let d1 = self.d1();
        let d2 = self.d2();
        let sqrt_t = self.expiry.sqrt();
        let discount = (-self.rate * self.expiry).exp();

        let decay = -(self.spot * self.volatility * norm_pdf(d1)) / (two * sqrt_t);
        let carry = self.rate * self.strike * discount;

        let annual = match option_type {
            OptionType::Call => decay - carry * norm_cdf(d2),
            OptionType::Put => decay + carry * norm_cdf(-d2),
        };

        annual / days
    }

    /// Computes Rho, scaled per 1 percentage-point rate move (×0.01).
    ///
    /// - Call: K·T·e^(-rT)·Φ(d₂)·0.01
    /// - Put: -K·T·e^(-rT)·Φ(-d₂)·0.01
    ///
    /// Zero at `expiry == 0`.
    #[inline]
    pub fn rho(&self, option_type: OptionType) -> T {
        if self.at_expiry() {
            return T::zero();
        }

        let scale = T::from(0.01).unwrap();
        let d2 = self.d2();
        let discount = (-self.rate * self.expiry).exp();
        let base = self.strike * self.expiry * discount;

        match option_type {
            OptionType::Call => base * norm_cdf(d2) * scale,
            OptionType::Put => -base * norm_cdf(-d2) * scale,
        }
    }

    /// Computes all five Greeks in one pass, sharing the d₁/d₂
    /// evaluation across sensitivities.
    ///
    /// At `expiry == 0` delta is the exercise indicator and the other
    /// Greeks are zero.
    pub fn greeks(&self, option_type: OptionType) -> Greeks<T> {
        let zero = T::zero();
        let one = T::one();

        if self.at_expiry() {
            let delta = match option_type {
                OptionType::Call => {
                    if self.spot > self.strike {
                        one
                    } else {
                        zero
                    }
                }
                OptionType::Put => {
                    if self.spot < self.strike {
                        -one
                    } else {
                        zero
                    }
                }
            };
            return Greeks {
                delta,
                gamma: zero,
                vega: zero,
                theta: zero,
                rho: zero,
            };
        }

        let two = T::from(2.0).unwrap();
        let pct = T::from(0.01).unwrap();
        let days = T::from(365.0).unwrap();

        let d1 = self.d1();
        let d2 = self.d2();
        let sqrt_t = self.expiry.sqrt();
        let pdf_d1 = norm_pdf(d1);
        let discount = (-self.rate * self.expiry).exp();

        let delta = match option_type {
            OptionType::Call => norm_cdf(d1),
            OptionType::Put => -norm_cdf(-d1),
        };

        let gamma = pdf_d1 / (self.spot * self.volatility * sqrt_t);
        let vega = self.spot * pdf_d1 * sqrt_t * pct;

        let decay = -(self.spot * self.volatility * pdf_d1) / (two * sqrt_t);
        let carry = self.rate * self.strike * discount;
        let theta = match option_type {
            OptionType::Call => (decay - carry * norm_cdf(d2)) / days,
            OptionType::Put => (decay + carry * norm_cdf(-d2)) / days,
        };

        let rho_base = self.strike * self.expiry * discount;
        let rho = match option_type {
            OptionType::Call => rho_base * norm_cdf(d2) * pct,
            OptionType::Put => -rho_base * norm_cdf(-d2) * pct,
        };

        Greeks {
            delta,
            gamma,
            vega,
            theta,
            rho,
        }
    }
}
