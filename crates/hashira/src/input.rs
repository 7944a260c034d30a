//! JSON input documents.
//!
//! The expected shape is
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! `k` is read from `keys.k`, or from a top-level `k` when there is no
//! `keys` object. Every top-level entry whose key is a non-negative
//! integer is a root; a digit-only key too large for a label is an error.
//! Anything else is ignored.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ReconstructError;
use crate::roots::RootTriple;

/// A parsed input document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Input {
    /// Number of roots the polynomial is described by; its degree is `k - 1`.
    pub k: u64,
    /// Root triples in document order.
    pub triples: Vec<RootTriple>,
}

impl Input {
    /// Number of linear factors to expand, or `None` when `k` is zero.
    #[must_use]
    pub fn degree(&self) -> Option<u64> {
        self.k.checked_sub(1)
    }
}

/// Parses an input document.
///
/// # Errors
///
/// - [`ReconstructError::Json`] if the text is not a JSON object.
/// - [`ReconstructError::MissingK`] / [`ReconstructError::InvalidK`] for a
///   missing or non-integer `k`.
/// - [`ReconstructError::InvalidLabel`] for a digit-only key beyond `u64`.
/// - [`ReconstructError::MalformedRoot`] for a labelled entry without a
///   usable `base` and `value`.
pub fn parse_input(text: &str) -> Result<Input, ReconstructError> {
    let doc: Map<String, Value> = serde_json::from_str(text)?;

    let k_value = match doc.get("keys") {
        Some(Value::Object(keys)) => keys.get("k"),
        _ => doc.get("k"),
    };
    let k = parse_k(k_value.ok_or(ReconstructError::MissingK)?)?;

    let mut triples = Vec::new();
    for (key, entry) in &doc {
        if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        let label = key
            .parse::<u64>()
            .map_err(|_| ReconstructError::InvalidLabel { key: key.clone() })?;
        triples.push(parse_root(label, entry)?);
    }

    debug!(k, roots = triples.len(), "parsed input");
    Ok(Input { k, triples })
}

fn parse_k(value: &Value) -> Result<u64, ReconstructError> {
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ReconstructError::InvalidK {
        found: value.to_string(),
    })
}

fn parse_root(label: u64, entry: &Value) -> Result<RootTriple, ReconstructError> {
    let malformed = |reason| ReconstructError::MalformedRoot { label, reason };

    let Value::Object(fields) = entry else {
        return Err(malformed("expected an object with \"base\" and \"value\""));
    };

    let base = match fields.get("base") {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        Some(_) => None,
        None => return Err(malformed("missing \"base\"")),
    }
    .ok_or_else(|| malformed("\"base\" is not a non-negative integer"))?;
    // The decoder owns the range check; anything wider than u32 is out of range anyway
    let base = u32::try_from(base).unwrap_or(u32::MAX);

    let digits = match fields.get("value") {
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err(malformed("\"value\" is not a string")),
        None => return Err(malformed("missing \"value\"")),
    };

    Ok(RootTriple::new(label, base, digits))
}
