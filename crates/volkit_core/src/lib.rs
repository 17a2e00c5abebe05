//! # volkit_core: Numerical foundation for the volkit pricing library
//!
//! Foundation-layer crate providing:
//! - Derivative-free root finding (`math::solvers`)
//! - Structured error types (`types::error`)
//!
//! This layer has no dependency on other volkit crates and keeps its
//! external dependencies minimal:
//! - num-traits: traits for generic numerical computation
//! - thiserror: structured error derives
//!
//! All solvers are generic over [`num_traits::Float`], so both `f32`
//! and `f64` are supported, and every operation is a pure function of
//! its arguments: no shared mutable state, no I/O, safe to call from
//! any number of threads without coordination.
//!
//! ## Usage
//!
//! ```rust
//! use volkit_core::math::solvers::{BrentSolver, SolverConfig};
//!
//! let solver = BrentSolver::new(SolverConfig::default());
//! let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
