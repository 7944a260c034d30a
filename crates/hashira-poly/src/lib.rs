//! # hashira-poly
//!
//! Exact integer polynomials for hashira.
//!
//! This crate provides:
//! - Monic univariate polynomials over arbitrary precision integers
//! - Expansion of `(x - r_0)(x - r_1)...(x - r_{m-1})` from a list of roots
//!
//! ## Algorithm
//!
//! The product is built one linear factor at a time. Multiplying by a
//! monic `(x - r)` is a shift plus one scaled subtraction per
//! coefficient, so every intermediate polynomial stays monic and no
//! division ever happens.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod monic;

#[cfg(test)]
mod proptests;

pub use monic::{BuildError, MonicPoly};
