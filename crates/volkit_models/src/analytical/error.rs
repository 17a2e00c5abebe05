//! Error types for analytical pricing operations.

use thiserror::Error;
use volkit_core::types::PricingError;

/// Analytical pricing errors.
///
/// Every variant is an invalid-input failure: the pricing kernel never
/// special-cases a bad parameter into a NaN result, it rejects the
/// parameter set up front so callers can distinguish "bad input" from
/// "valid computation yielding an extreme value".
///
/// # Variants
/// - `InvalidSpot`: non-positive spot price
/// - `InvalidStrike`: non-positive strike price
/// - `InvalidExpiry`: negative time to expiry (or zero where the
///   operation requires a live option, e.g. implied vol)
/// - `InvalidVolatility`: non-positive volatility
///
/// # Examples
/// ```
/// use volkit_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike price value
        strike: f64,
    },

    /// Invalid time to expiry.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value (in years)
        expiry: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_strike_display() {
        let err = AnalyticalError::InvalidStrike { strike: 0.0 };
        assert_eq!(format!("{}", err), "Invalid strike price: K = 0");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = AnalyticalError::InvalidExpiry { expiry: -0.5 };
        assert_eq!(format!("{}", err), "Invalid expiry: T = -0.5");
    }

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_into_pricing_error() {
        let err = AnalyticalError::InvalidSpot { spot: -1.0 };
        let pricing_err: PricingError = err.into();
        match pricing_err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("spot")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalyticalError::InvalidVolatility { volatility: 0.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = AnalyticalError::InvalidExpiry { expiry: -1.0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
