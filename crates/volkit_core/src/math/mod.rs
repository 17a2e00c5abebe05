//! Numerical algorithms.

pub mod solvers;
