//! Synthesizer tree evaluation.
//!
//! The leaf layer applies the base PRF to pairs of matrix entries
//! selected by adjacent input bits: the entry for the even-position bit
//! is the PRF key, the entry for the odd-position bit is the message.
//! That single step is the synthesizer — any change in either selected
//! entry makes the leaf computationally independent.  Successive layers
//! fold the sequence pairwise until one block remains, giving O(N) PRF
//! calls at depth O(log N).

use crate::error::CprfError;
use crate::key::KeyMatrix;
use crate::prf::{BasePrf, Block};

/// Bit of `bytes` at position `index`, most-significant-first per byte.
fn bit_at(bytes: &[u8], index: usize) -> usize {
    usize::from((bytes[index / 8] >> (7 - index % 8)) & 1)
}

/// Evaluates the tree over `matrix` on `value`, returning the root.
pub(crate) fn evaluate<F: BasePrf>(
    prf: &F,
    matrix: &KeyMatrix,
    value: &[u8],
) -> Result<Block, CprfError> {
    let bits = value.len() * 8;
    let width = matrix.width();
    if bits != width {
        return Err(CprfError::InputLength { bits, width });
    }

    let mut level = Vec::with_capacity(width / 2);
    for i in (0..width).step_by(2) {
        let key = matrix.entry(bit_at(value, i), i);
        let message = matrix.entry(bit_at(value, i + 1), i + 1);
        level.push(prf.apply(key, message)?);
    }

    // The width is a power of two, so every layer halves exactly.
    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len() / 2);
        for pair in level.chunks(2) {
            next.push(prf.apply(&pair[0], &pair[1])?);
        }
        level = next;
    }
    Ok(level[0])
}
