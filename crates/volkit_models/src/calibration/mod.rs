//! Calibration of model parameters to observed market prices.
//!
//! The only calibration this library performs is single-point implied
//! volatility: backing out the σ that makes the Black-Scholes price
//! equal an observed market price.

pub mod error;
pub mod implied_vol;

// Re-export main types at module level
pub use error::ImpliedVolError;
pub use implied_vol::ImpliedVolSolver;
