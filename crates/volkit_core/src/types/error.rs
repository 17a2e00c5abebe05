//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: top-level categorised pricing errors
//! - `SolverError`: errors from root-finding solvers

use thiserror::Error;

/// Categorised pricing errors.
///
/// The top-level error surface of the library. Layer crates define
/// their own structured errors and convert into this type so that
/// batch callers can decide uniformly whether to skip, log, or abort
/// a failed row.
///
/// # Variants
/// - `InvalidInput`: invalid market data or parameters
/// - `NumericalInstability`: computation produced an unusable value
/// - `NoConvergence`: an iterative method failed to produce a result
///
/// # Examples
/// ```
/// use volkit_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Iterative computation failed to converge to a result.
    #[error("No convergence: {0}")]
    NoConvergence(String),
}

/// Root-finder errors.
///
/// Failures are explicit: a solver never returns a NaN or other
/// sentinel value in place of a root.
///
/// # Variants
/// - `NoBracket`: function values at the bracket endpoints have the
///   same sign, so no root is guaranteed to exist in the interval
/// - `MaxIterationsExceeded`: iteration budget exhausted before the
///   convergence tolerance was met
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },
}

impl From<SolverError> for PricingError {
    fn from(err: SolverError) -> Self {
        PricingError::NoConvergence(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = PricingError::InvalidInput("S = -1".to_string());
        assert_eq!(format!("{}", err), "Invalid input: S = -1");
    }

    #[test]
    fn test_no_bracket_display() {
        let err = SolverError::NoBracket { a: 1e-6, b: 5.0 };
        assert_eq!(
            format!("{}", err),
            "No bracket: f(0.000001) and f(5) have same sign"
        );
    }

    #[test]
    fn test_max_iterations_display() {
        let err = SolverError::MaxIterationsExceeded { iterations: 100 };
        assert_eq!(format!("{}", err), "Failed to converge after 100 iterations");
    }

    #[test]
    fn test_solver_error_into_pricing_error() {
        let err: PricingError = SolverError::MaxIterationsExceeded { iterations: 7 }.into();
        match err {
            PricingError::NoConvergence(msg) => assert!(msg.contains("7 iterations")),
            other => panic!("Expected NoConvergence, got {:?}", other),
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SolverError::NoBracket { a: 0.0, b: 1.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::NoConvergence("bracket".to_string());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
