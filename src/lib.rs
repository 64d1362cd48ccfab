#![deny(missing_docs)]

//! # synth-cprf
//!
//! A bit-fixing **constrained pseudorandom function** (CPRF) built from a
//! pseudorandom-synthesizer binary tree, following the construction of
//! *"Constrained Pseudorandom Functions from Pseudorandom Synthesizers"*.
//!
//! A master key is a 2×N matrix of independent random 128-bit entries
//! paired with a base PRF (RFC 4493 AES-CMAC).  Evaluation selects one
//! entry per input bit position, combines adjacent selections with one
//! PRF call each, and folds the resulting layer pairwise down to a single
//! 128-bit root.  Constraining a key to a pattern over `{0, 1, *}`
//! rerandomizes exactly the entries a matching input never touches, so
//! the constrained key reproduces the master key's outputs on every value
//! agreeing with the pattern's fixed positions and is pseudorandom on
//! every value that does not.
//!
//! Keys are plain values: there is no global state, no serialization
//! format, and no I/O beyond drawing OS randomness when key material is
//! created.  All operations are pure, synchronous and safe to run
//! concurrently over shared keys.
//!
//! ## Usage
//!
//! ```rust
//! use synth_cprf::SecretKey;
//!
//! let msk = SecretKey::generate();
//! let value = [0x5A; 16];
//! let tag = msk.eval(&value)?;
//!
//! // 0x5A starts with bits 0, 1; this pattern fixes exactly those two.
//! let constrained = msk.constrain("01")?;
//! assert_eq!(constrained.eval(&value)?, tag);
//! # Ok::<(), synth_cprf::CprfError>(())
//! ```

mod constrain;
mod error;
mod key;
mod prf;
mod synth;

pub use error::CprfError;
pub use key::{SecretKey, DEFAULT_INPUT_BITS};
pub use prf::{block_to_hex, AesCmacPrf, BasePrf, Block, BLOCK_SIZE};

/// Generates a fresh 128-bit-width master key.
///
/// Convenience for [`SecretKey::generate`].
pub fn keygen() -> SecretKey {
    SecretKey::generate()
}
