//! # Hashira
//!
//! Reconstructs a monic polynomial from its roots, where each root is
//! written as a signed literal in some base between 2 and 36.
//!
//! ## Pipeline
//!
//! - **Input**: a JSON document carrying `k` and labelled
//!   `{ "base": ..., "value": ... }` entries ([`input`])
//! - **Decode**: every entry becomes an exact [`Integer`]; the roots are
//!   ordered by label ([`roots`])
//! - **Build**: the first `k - 1` roots are expanded into
//!   `(x - r_0)...(x - r_{k-2})` ([`MonicPoly`])
//!
//! ## Quick Start
//!
//! ```rust
//! use hashira::prelude::*;
//!
//! let input = parse_input(r#"{
//!     "keys": { "n": 2, "k": 3 },
//!     "1": { "base": "10", "value": "2" },
//!     "2": { "base": "2", "value": "11" }
//! }"#).unwrap();
//!
//! let poly = reconstruct(&input).unwrap().unwrap();
//! assert_eq!(poly.to_string(), "1 -5 6");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod input;
pub mod reconstruct;
pub mod roots;

#[cfg(test)]
mod proptests;

pub use hashira_integers as integers;
pub use hashira_poly as poly;

pub use error::ReconstructError;
pub use hashira_integers::Integer;
pub use hashira_poly::MonicPoly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::ReconstructError;
    pub use crate::input::{parse_input, Input};
    pub use crate::reconstruct::{reconstruct, reconstruct_triples};
    pub use crate::roots::{Root, RootSet, RootTriple};
    pub use hashira_integers::{decode, encode, Integer, RadixError};
    pub use hashira_poly::{BuildError, MonicPoly};
}
