//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Standard normal distribution functions
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: supports both `f32` and `f64`
//! - **Fail-fast validation**: non-positive inputs are rejected at
//!   construction, never propagated as NaN
//! - **Numerical stability**: erfc-based CDF for accuracy

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, Greeks, OptionType};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
