//! Error types for implied-volatility extraction.

use thiserror::Error;
use volkit_core::types::PricingError;

use crate::analytical::AnalyticalError;

/// Implied-volatility solver errors.
///
/// Failure is always explicit: the solver never returns a NaN or other
/// sentinel numeric value that could silently poison downstream
/// aggregation.
///
/// # Variants
/// - `InvalidInput`: the quote parameters fail validation
/// - `NoSolution`: no volatility in the search bracket reproduces the
///   market price (price below intrinsic, or above the price at the
///   bracket's upper volatility)
/// - `NoConvergence`: the root search exhausted its iteration budget
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ImpliedVolError {
    /// The quote parameters fail validation.
    #[error(transparent)]
    InvalidInput(#[from] AnalyticalError),

    /// No volatility within the bracket reproduces the market price.
    #[error("No implied volatility in [{lo}, {hi}] reproduces market price {market_price}")]
    NoSolution {
        /// The observed market price
        market_price: f64,
        /// Lower volatility bracket endpoint
        lo: f64,
        /// Upper volatility bracket endpoint
        hi: f64,
    },

    /// The root search exhausted its iteration budget.
    #[error("Implied volatility search did not converge within {iterations} iterations")]
    NoConvergence {
        /// Number of iterations attempted
        iterations: usize,
    },
}

impl From<ImpliedVolError> for PricingError {
    fn from(err: ImpliedVolError) -> Self {
        match err {
            ImpliedVolError::InvalidInput(inner) => inner.into(),
            ImpliedVolError::NoSolution { .. } | ImpliedVolError::NoConvergence { .. } => {
                PricingError::NoConvergence(err.to_string())
            }
        }
    }
}
