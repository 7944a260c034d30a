//! The decode-then-build pipeline.

use tracing::{debug, info};

use hashira_poly::MonicPoly;

use crate::error::ReconstructError;
use crate::input::Input;
use crate::roots::{RootSet, RootTriple};

/// Reconstructs the polynomial described by an input document.
///
/// Returns `Ok(None)` when `k` is zero: there is nothing to build and no
/// root is decoded.
///
/// # Errors
///
/// Propagates decoder and builder errors unchanged.
pub fn reconstruct(input: &Input) -> Result<Option<MonicPoly>, ReconstructError> {
    reconstruct_triples(input.k, &input.triples)
}

/// Decodes `triples` and expands the first `k - 1` roots in label order.
///
/// Every triple is decoded before any building starts, so a bad literal
/// fails the run even if it sorts after the roots that would be used.
///
/// # Errors
///
/// - [`ReconstructError::Radix`] for the lowest-labelled bad literal.
/// - [`ReconstructError::Build`] when fewer than `k - 1` roots exist.
pub fn reconstruct_triples(
    k: u64,
    triples: &[RootTriple],
) -> Result<Option<MonicPoly>, ReconstructError> {
    let Some(m) = k.checked_sub(1) else {
        debug!("k is zero, nothing to build");
        return Ok(None);
    };

    let roots = RootSet::decode(triples)?;
    // A degree beyond usize can never be satisfied by an in-memory root set
    let m = usize::try_from(m).unwrap_or(usize::MAX);

    let poly = MonicPoly::from_roots(&roots.values(), m)?;
    info!(
        degree = poly.degree(),
        supplied = roots.len(),
        "reconstructed polynomial"
    );
    Ok(Some(poly))
}
