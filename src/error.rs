//! Error types surfaced by the CPRF operations.
//!
//! Every failure is detected synchronously at the boundary of the public
//! operation that triggered it and reported to the caller immediately.
//! None of these conditions is transient; they all indicate misuse of the
//! API, so nothing is retried and no partial result is ever returned.

use thiserror::Error;

/// Errors returned by key generation, evaluation and constraining.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CprfError {
    /// The base PRF was invoked with a key that is not exactly 16 bytes.
    #[error("base PRF key must be exactly 16 bytes, got {len}")]
    KeyLength {
        /// Length of the rejected key in bytes.
        len: usize,
    },

    /// The evaluation input's bit-length does not match the key's width.
    #[error("input is {bits} bits but the key evaluates exactly {width}-bit values")]
    InputLength {
        /// Bit-length of the rejected input.
        bits: usize,
        /// Width the key was generated with.
        width: usize,
    },

    /// The bit-fixing pattern has more positions than the key has columns.
    #[error("pattern fixes {len} positions but the key is only {width} bits wide")]
    PatternLength {
        /// Number of positions in the rejected pattern.
        len: usize,
        /// Width the key was generated with.
        width: usize,
    },

    /// The bit-fixing pattern contains a character outside `{0, 1, *}`.
    #[error("pattern character {found:?} at position {position} is not '0', '1' or '*'")]
    InvalidPattern {
        /// The offending character.
        found: char,
        /// Zero-based position of the offending character.
        position: usize,
    },

    /// The requested key width cannot be reduced to a single root.
    #[error("width {bits} is unsupported: the width must be a power of two and at least 8")]
    UnsupportedWidth {
        /// The rejected width in bits.
        bits: usize,
    },
}
