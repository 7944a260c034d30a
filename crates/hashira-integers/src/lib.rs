//! # hashira-integers
//!
//! Arbitrary precision integers for hashira.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Signed literals in any base from 2 to 36 (`radix`)
//!
//! ## Why unbounded
//!
//! A 20-digit base-36 literal already overflows `u64`, and the polynomial
//! coefficients grow with the product of every root, so nothing here uses
//! fixed-width arithmetic.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod radix;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use radix::{decode, encode, RadixError, MAX_RADIX, MIN_RADIX};
