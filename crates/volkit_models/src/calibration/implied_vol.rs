//! Implied volatility via bracketed root finding.

use num_traits::Float;
use volkit_core::math::solvers::{BrentSolver, SolverConfig};
use volkit_core::types::SolverError;

use super::error::ImpliedVolError;
use crate::analytical::{AnalyticalError, BlackScholes, OptionType};

/// Default lower volatility bracket endpoint (0.0001%).
pub const DEFAULT_VOL_LO: f64 = 1e-6;

/// Default upper volatility bracket endpoint (500%).
pub const DEFAULT_VOL_HI: f64 = 5.0;

/// Backs a volatility out of an observed market price.
///
/// Defines the objective `f(σ) = price(S, K, T, r, σ, type) - market_price`
/// and searches for its root over the volatility bracket with
/// [`BrentSolver`]. The objective is monotone in σ (vega > 0), so a
/// sign change across the bracket pins down a unique solution.
///
/// For fixed inputs the solver always returns the same result: no
/// randomness, no shared mutable state.
///
/// # Examples
/// ```
/// use volkit_models::analytical::{BlackScholes, OptionType};
/// use volkit_models::calibration::ImpliedVolSolver;
///
/// let bs = BlackScholes::new(100.0_f64, 100.0, 1.0, 0.01, 0.2).unwrap();
/// let price = bs.price(OptionType::Call);
///
/// let solver = ImpliedVolSolver::with_defaults();
/// let vol = solver
///     .solve(100.0, 100.0, 1.0, 0.01, price, OptionType::Call)
///     .unwrap();
/// assert!((vol - 0.2).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver<T: Float> {
    solver: BrentSolver<T>,
    vol_lo: T,
    vol_hi: T,
}

impl<T: Float> ImpliedVolSolver<T> {
    /// Create a solver with the given root-finder configuration and
    /// the default volatility bracket `[1e-6, 5.0]`.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self {
            solver: BrentSolver::new(config),
            vol_lo: T::from(DEFAULT_VOL_LO).unwrap(),
            vol_hi: T::from(DEFAULT_VOL_HI).unwrap(),
        }
    }

    /// Create a solver with default configuration and bracket.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Create a solver with a custom volatility bracket.
    ///
    /// # Panics
    ///
    /// Panics if `vol_lo <= 0` or `vol_lo >= vol_hi`.
    pub fn with_bracket(config: SolverConfig<T>, vol_lo: T, vol_hi: T) -> Self {
        assert!(vol_lo > T::zero(), "vol_lo must be positive");
        assert!(vol_lo < vol_hi, "vol_lo must be below vol_hi");
        Self {
            solver: BrentSolver::new(config),
            vol_lo,
            vol_hi,
        }
    }

    /// Returns the volatility bracket `(lo, hi)`.
    pub fn bracket(&self) -> (T, T) {
        (self.vol_lo, self.vol_hi)
    }

    /// Solve for the volatility that reproduces `market_price`.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `expiry` - Time to expiry in years (must be strictly positive:
    ///   a zero-expiry price carries no volatility information)
    /// * `rate` - Risk-free interest rate, annualised
    /// * `market_price` - Observed option price
    /// * `option_type` - Call or put
    ///
    /// # Errors
    /// - [`ImpliedVolError::InvalidInput`] for invalid quote parameters
    /// - [`ImpliedVolError::NoSolution`] when the market price is not
    ///   attainable within the bracket (below intrinsic value, or above
    ///   the price at the upper bracket volatility)
    /// - [`ImpliedVolError::NoConvergence`] when the iteration budget
    ///   is exhausted
    pub fn solve(
        &self,
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        market_price: T,
        option_type: OptionType,
    ) -> Result<T, ImpliedVolError> {
        if expiry <= T::zero() {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(0.0),
            }
            .into());
        }

        // Validates spot/strike once; the bracket volatilities are
        // positive by construction.
        let quote = BlackScholes::new(spot, strike, expiry, rate, self.vol_lo)?;

        let objective = |vol: T| quote.price_with(vol, option_type) - market_price;

        self.solver
            .find_root(objective, self.vol_lo, self.vol_hi)
            .map_err(|err| match err {
                SolverError::NoBracket { a, b } => ImpliedVolError::NoSolution {
                    market_price: market_price.to_f64().unwrap_or(f64::NAN),
                    lo: a,
                    hi: b,
                },
                SolverError::MaxIterationsExceeded { iterations } => {
                    ImpliedVolError::NoConvergence { iterations }
                }
            })
    }
}

impl<T: Float> Default for ImpliedVolSolver<T> {
    fn default() -> Self {
        Self::with_defaults()
    }
}
