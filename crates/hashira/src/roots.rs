//! Labelled roots and their decoding.
//!
//! Decoding is all-or-nothing: a [`RootSet`] is only produced when every
//! triple decodes. Large batches are decoded in parallel with rayon; the
//! outcome, including which error is reported, matches a sequential run
//! in label order.

use rayon::prelude::*;
use tracing::debug;

use hashira_integers::{decode, Integer, RadixError};

/// Minimum number of triples before decoding goes parallel.
pub const PARALLEL_THRESHOLD: usize = 64;

/// An undecoded root as delivered by the input layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootTriple {
    /// Ordering label.
    pub label: u64,
    /// Base the digits are written in.
    pub base: u32,
    /// The signed literal.
    pub digits: String,
}

impl RootTriple {
    /// Creates a new triple.
    #[must_use]
    pub fn new(label: u64, base: u32, digits: impl Into<String>) -> Self {
        Self {
            label,
            base,
            digits: digits.into(),
        }
    }

    /// Decodes the literal into a [`Root`].
    ///
    /// # Errors
    ///
    /// Returns the decoder's [`RadixError`] unchanged.
    pub fn decode(&self) -> Result<Root, RadixError> {
        let value = decode(&self.digits, self.base)?;
        debug!(label = self.label, base = self.base, value = %value, "decoded root");
        Ok(Root::new(self.label, value))
    }
}

/// A decoded root. The label only determines ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Root {
    label: u64,
    value: Integer,
}

impl Root {
    /// Creates a new root.
    #[must_use]
    pub fn new(label: u64, value: Integer) -> Self {
        Self { label, value }
    }

    /// Returns the label.
    #[must_use]
    pub fn label(&self) -> u64 {
        self.label
    }

    /// Returns the value.
    #[must_use]
    pub fn value(&self) -> &Integer {
        &self.value
    }
}

/// Roots sorted ascending by label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RootSet {
    roots: Vec<Root>,
}

impl RootSet {
    /// Collects roots, sorting them by label.
    ///
    /// The sort is stable, so roots sharing a label keep their given order.
    #[must_use]
    pub fn new(mut roots: Vec<Root>) -> Self {
        roots.sort_by_key(Root::label);
        Self { roots }
    }

    /// Decodes every triple.
    ///
    /// # Errors
    ///
    /// Returns the error of the lowest-labelled triple that fails.
    pub fn decode(triples: &[RootTriple]) -> Result<Self, RadixError> {
        let mut ordered: Vec<&RootTriple> = triples.iter().collect();
        ordered.sort_by_key(|t| t.label);

        let decoded: Vec<Result<Root, RadixError>> = if ordered.len() < PARALLEL_THRESHOLD {
            ordered.iter().map(|t| t.decode()).collect()
        } else {
            ordered.par_iter().map(|t| t.decode()).collect()
        };

        let roots = decoded.into_iter().collect::<Result<Vec<_>, _>>()?;
        Ok(Self { roots })
    }

    /// Returns the number of roots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Returns true if there are no roots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Returns the roots in label order.
    #[must_use]
    pub fn roots(&self) -> &[Root] {
        &self.roots
    }

    /// Returns the root values in label order.
    #[must_use]
    pub fn values(&self) -> Vec<Integer> {
        self.roots.iter().map(|r| r.value.clone()).collect()
    }
}
