//! Errors surfaced by a reconstruction run.

use hashira_integers::RadixError;
use hashira_poly::BuildError;
use thiserror::Error;

/// Everything that can abort a run.
///
/// Decoder and builder errors are carried through unchanged; the other
/// variants describe input documents that do not have the expected shape.
#[derive(Debug, Error)]
pub enum ReconstructError {
    /// A root literal or its base was rejected.
    #[error(transparent)]
    Radix(#[from] RadixError),

    /// The polynomial could not be built from the decoded roots.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// The input is not valid JSON.
    #[error("malformed input: {0}")]
    Json(#[from] serde_json::Error),

    /// The input has no `k`.
    #[error("missing \"k\" in input")]
    MissingK,

    /// `k` is present but is not a non-negative integer.
    #[error("invalid \"k\": {found}")]
    InvalidK {
        /// The rejected value, as it appeared in the input.
        found: String,
    },

    /// A digit-only key does not fit in a label.
    #[error("root label \"{key}\" is out of range")]
    InvalidLabel {
        /// The key as it appeared in the input.
        key: String,
    },

    /// A labelled entry is not a `{ "base": ..., "value": ... }` object.
    #[error("malformed root \"{label}\": {reason}")]
    MalformedRoot {
        /// The entry's label.
        label: u64,
        /// What is wrong with it.
        reason: &'static str,
    },
}

