//! # Volkit Models
//!
//! Closed-form pricing and implied-volatility extraction for vanilla
//! European options.
//!
//! This crate provides:
//! - Black-Scholes pricing and analytical Greeks (`analytical`)
//! - Implied volatility via bracketed root finding (`calibration`)
//! - Parallel option-chain batch evaluation (`chain`)
//!
//! ## Design principles
//!
//! - **Pure functions of scalar inputs**: no shared mutable state, no
//!   I/O; every result is computed fresh from the arguments given, so
//!   concurrent use needs no coordination.
//! - **Explicit failure**: invalid inputs and failed root searches are
//!   structured errors, never NaN sentinels that could leak into
//!   downstream aggregation.
//! - **Enum-dispatched option type** for an exhaustive Call/Put domain.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod calibration;
pub mod chain;
