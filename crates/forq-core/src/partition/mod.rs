//! Balanced splitting of a work set into `factor` near-equal batches.
//!
//! Batches are contiguous runs of the input, so relative order is preserved
//! and a keyed input (a list of `(key, value)` pairs) is recovered exactly by
//! the union of the outputs. Keys are never sorted or re-hashed; the caller's
//! iteration order is the contract.
use crate::error::CoreError;

/// Split `items` into `factor` contiguous batches of near-equal length.
///
/// The first `items.len() % factor` batches get one extra element, the rest
/// get `items.len() / factor`, so batch sizes differ by at most one. A factor
/// larger than the input yields empty trailing batches.
///
/// `factor == 0` is a contract violation and is rejected with
/// [`CoreError::InvalidFactor`].
pub fn split<T>(items: Vec<T>, factor: usize) -> Result<Vec<Vec<T>>, CoreError> {
    if factor == 0 {
        return Err(CoreError::InvalidFactor(factor));
    }

    let lens = batch_lens(items.len(), factor);
    let mut items = items.into_iter();
    let mut out = Vec::with_capacity(factor);
    for len in lens {
        out.push(items.by_ref().take(len).collect());
    }
    Ok(out)
}

/// Batch lengths for splitting `len` elements into `factor` groups.
fn batch_lens(len: usize, factor: usize) -> Vec<usize> {
    let base = len / factor;
    let extra = len % factor;
    (0..factor)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}
