//! Solver configuration.

use num_traits::Float;

/// Configuration shared by root-finding solvers.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for the tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use volkit_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance < 1e-8);
/// assert!(config.max_iterations >= 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance: the solver stops once `|f(x)| < tolerance`
    /// or the bracket has shrunk below it.
    pub tolerance: T,

    /// Iteration budget. Exceeding it yields
    /// [`SolverError::MaxIterationsExceeded`](crate::types::SolverError::MaxIterationsExceeded),
    /// guaranteeing termination even on pathological inputs.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default configuration: tolerance 1e-10, 100 iterations.
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a configuration with explicit values.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// High-precision settings: tolerance 1e-14, 500 iterations.
    pub fn high_precision() -> Self {
        Self {
            tolerance: T::from(1e-14).unwrap(),
            max_iterations: 500,
        }
    }

    /// Speed-oriented settings: tolerance 1e-6, 50 iterations.
    pub fn fast() -> Self {
        Self {
            tolerance: T::from(1e-6).unwrap(),
            max_iterations: 50,
        }
    }
}
