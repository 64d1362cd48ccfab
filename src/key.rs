//! Key material for the CPRF.
//!
//! A key is the pairing of a base PRF with a 2×N matrix of independently
//! random 128-bit entries, where N is the supported input bit-length.
//! Row 0 holds the entry used when the input bit at a column is 0, row 1
//! the entry used when it is 1.  The matrix is allocated once at
//! construction and never resized: N is a security parameter of the key,
//! not a mutable dimension.  Constrained keys share this exact
//! representation and are produced only by [`SecretKey::constrain`].

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;

use crate::constrain;
use crate::error::CprfError;
use crate::prf::{AesCmacPrf, BasePrf, Block};
use crate::synth;

/// Width in bits of keys produced by [`SecretKey::generate`].
pub const DEFAULT_INPUT_BITS: usize = 128;

/// The 2×N matrix of random blocks backing a key.
///
/// Entries are drawn from the operating system's CSPRNG.  Both rows are
/// boxed slices of identical length, fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct KeyMatrix {
    rows: [Box<[Block]>; 2],
}

impl KeyMatrix {
    /// Fills a fresh matrix of the given width with random entries.
    fn random(bits: usize) -> Self {
        let mut rows = [
            vec![[0u8; 16]; bits].into_boxed_slice(),
            vec![[0u8; 16]; bits].into_boxed_slice(),
        ];
        for row in &mut rows {
            for entry in row.iter_mut() {
                OsRng.fill_bytes(entry);
            }
        }
        Self { rows }
    }

    /// Number of columns, i.e. the supported input bit-length.
    pub(crate) fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Entry selected by a bit value and its position in the input.
    pub(crate) fn entry(&self, bit: usize, column: usize) -> &Block {
        &self.rows[bit][column]
    }

    /// Overwrites one entry with a fresh random block.
    pub(crate) fn rerandomize(&mut self, row: usize, column: usize) {
        OsRng.fill_bytes(&mut self.rows[row][column]);
    }
}

/// Master (or constrained) key material: a base PRF paired with a matrix.
///
/// The type is generic over the base PRF so the primitive is a documented,
/// substitutable capability; [`SecretKey::generate`] fixes it to
/// [`AesCmacPrf`].  Keys are immutable after construction: evaluation
/// reads the matrix, and [`SecretKey::constrain`] copies it before
/// touching any entry, so a key shared across threads needs no
/// synchronization.
#[derive(Clone)]
pub struct SecretKey<F: BasePrf = AesCmacPrf> {
    pub(crate) prf: F,
    pub(crate) matrix: KeyMatrix,
}

impl SecretKey<AesCmacPrf> {
    /// Generates a fresh master key of the default 128-bit width.
    pub fn generate() -> Self {
        Self {
            prf: AesCmacPrf,
            matrix: KeyMatrix::random(DEFAULT_INPUT_BITS),
        }
    }

    /// Generates a fresh master key supporting `bits`-bit inputs.
    ///
    /// The width must be a power of two no smaller than 8: inputs are
    /// whole bytes, and the pairwise reduction halves the leaf layer
    /// until a single root remains, which requires a power-of-two leaf
    /// count.  Other widths fail with [`CprfError::UnsupportedWidth`].
    pub fn generate_with_width(bits: usize) -> Result<Self, CprfError> {
        Self::with_prf(AesCmacPrf, bits)
    }
}

impl<F: BasePrf> SecretKey<F> {
    /// Generates a fresh master key using a caller-supplied base PRF.
    pub fn with_prf(prf: F, bits: usize) -> Result<Self, CprfError> {
        if bits < 8 || !bits.is_power_of_two() {
            return Err(CprfError::UnsupportedWidth { bits });
        }
        Ok(Self {
            prf,
            matrix: KeyMatrix::random(bits),
        })
    }

    /// Input bit-length this key evaluates.
    pub fn width(&self) -> usize {
        self.matrix.width()
    }

    /// Evaluates the CPRF on `value`, a byte string of exactly
    /// `self.width() / 8` bytes.
    ///
    /// Bits are read most-significant-first within each byte.  The result
    /// is the root of the synthesizer tree: one PRF call per adjacent bit
    /// pair at the leaves, then pairwise folds until a single block
    /// remains.  Deterministic in `(self, value)`.
    pub fn eval(&self, value: &[u8]) -> Result<Block, CprfError> {
        synth::evaluate(&self.prf, &self.matrix, value)
    }

    /// Derives a key constrained to inputs matching a bit-fixing pattern.
    ///
    /// `pattern` is a string over `{0, 1, *}`, at most `self.width()`
    /// characters; positions past its end are implicitly `*`.  At every
    /// fixed position the matrix entry for the *opposite* bit value is
    /// replaced with a fresh random block, so evaluation agrees with this
    /// key exactly on inputs whose bits match every fixed position and is
    /// pseudorandom elsewhere.  `self` is never mutated.
    pub fn constrain(&self, pattern: &str) -> Result<Self, CprfError>
    where
        F: Clone,
    {
        constrain::derive(self, pattern)
    }
}

impl<F: BasePrf + fmt::Debug> fmt::Debug for SecretKey<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("prf", &self.prf)
            .field("width", &self.matrix.width())
            .field("matrix", &"[REDACTED]")
            .finish()
    }
}
