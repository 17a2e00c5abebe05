//! Brent's method root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Brent's method root finder.
///
/// Combines bisection, the secant method, and inverse quadratic
/// interpolation. Requires no derivative and is guaranteed to converge
/// for a continuous function given a bracket over which it changes
/// sign: interpolation steps are taken when they shrink the bracket
/// faster than bisection would, and the method falls back to bisection
/// otherwise.
///
/// The solver is a pure function of its arguments and configuration:
/// identical inputs always produce identical outputs.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use volkit_core::math::solvers::{BrentSolver, SolverConfig};
///
/// let solver = BrentSolver::new(SolverConfig::default());
///
/// // Solve x² - 2 = 0 in bracket [0, 2]
/// let f = |x: f64| x * x - 2.0;
///
/// let root = solver.find_root(f, 0.0, 2.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BrentSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BrentSolver<T> {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Find a root of `f` in the bracket `[a, b]`.
    ///
    /// The bracket endpoints may be given in either order, but `f(a)`
    /// and `f(b)` must have opposite signs.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - root where `|f(x)| < tolerance` (or the bracket has
    ///   shrunk below the tolerance)
    /// * `Err(SolverError::NoBracket)` - `f(a)` and `f(b)` have the
    ///   same sign
    /// * `Err(SolverError::MaxIterationsExceeded)` - iteration budget
    ///   exhausted before convergence
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let zero = T::zero();
        let one = T::one();
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        let tol = self.config.tolerance;

        let mut a = a;
        let mut b = b;
        let mut fa = f(a);
        let mut fb = f(b);

        if fa * fb > zero {
            return Err(SolverError::NoBracket {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }

        // Keep b as the best estimate: |f(b)| <= |f(a)|.
        if fa.abs() < fb.abs() {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut fa, &mut fb);
        }

        let mut c = a;
        let mut fc = fa;
        // d: current step, e: step before that (controls acceptance).
        let mut d = b - a;
        let mut e = d;

        for _ in 0..self.config.max_iterations {
            if fb.abs() < tol {
                return Ok(b);
            }

            let mid = (c - b) / two;
            if mid.abs() <= tol {
                return Ok(b);
            }

            // Propose an interpolated step as (p, q) with step = p/q:
            // inverse quadratic when all three points are distinct in
            // function value, secant otherwise.
            let interp = if fa != fc && fb != fc {
                let r = fb / fc;
                let s = fb / fa;
                let t = fa / fc;
                let p = s * (t * (r - t) * (c - b) - (one - r) * (b - a));
                let q = (t - one) * (r - one) * (s - one);
                Some((p, q))
            } else if fb != fa {
                let s = fb / fa;
                Some((two * mid * s, one - s))
            } else {
                None
            };

            // Accept the proposal only while it stays inside the
            // bracket and shrinks faster than the previous step.
            match interp {
                Some((p, q))
                    if p.abs() < (three * mid * q).abs() / two
                        && p.abs() < (e * q).abs() / two =>
                {
                    e = d;
                    d = p / q;
                }
                _ => {
                    d = mid;
                    e = mid;
                }
            }

            a = b;
            fa = fb;

            // Never step by less than the tolerance.
            b = if d.abs() > tol {
                b + d
            } else if mid > zero {
                b + tol
            } else {
                b - tol
            };
            fb = f(b);

            // Restore a valid bracket: f(b) and f(c) must straddle zero.
            if fb * fc > zero {
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }

            // Rotate so b remains the best estimate.
            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }
}
