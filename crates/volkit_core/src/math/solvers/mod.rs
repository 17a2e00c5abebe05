//! Root-finding solvers.
//!
//! Designed for financial applications such as implied-volatility
//! extraction, where the objective is cheap to evaluate but its
//! derivative is inconvenient or unavailable.
//!
//! ## Available solvers
//!
//! - [`BrentSolver`]: robust bracketing method, no derivative required
//!
//! ## Configuration
//!
//! Solvers are configured through [`SolverConfig`]:
//! - `tolerance`: convergence tolerance (default: 1e-10)
//! - `max_iterations`: iteration budget (default: 100)
//!
//! ## Example
//!
//! ```
//! use volkit_core::math::solvers::{BrentSolver, SolverConfig};
//!
//! // Solve x³ - x - 2 = 0 in [1, 2]
//! let solver = BrentSolver::new(SolverConfig::default());
//! let f = |x: f64| x * x * x - x - 2.0;
//!
//! let root = solver.find_root(f, 1.0, 2.0).unwrap();
//! assert!(f(root).abs() < 1e-10);
//! ```

mod brent;
mod config;

pub use brent::BrentSolver;
pub use config::SolverConfig;
