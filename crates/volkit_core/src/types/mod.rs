//! Shared error types.
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level:
//! - [`PricingError`], [`SolverError`] from `error`

pub mod error;

pub use error::{PricingError, SolverError};
