//! Base PRF primitive: AES-CMAC producing a full 128-bit tag.
//!
//! The synthesizer tree is agnostic to the underlying pseudorandom
//! function; it only requires a deterministic map from a 16-byte key and
//! an arbitrary-length message to a 16-byte block.  The [`BasePrf`] trait
//! captures that contract, and [`AesCmacPrf`] provides the concrete
//! instantiation used by this crate: the cipher-based MAC of RFC 4493
//! over AES-128, with the standard subkey derivation and padding and no
//! tag truncation.

use aes::Aes128;
use cmac::{Cmac, Mac};

use crate::error::CprfError;

/// A 128-bit block: the unit for matrix entries, messages and outputs.
pub type Block = [u8; 16];

/// Size in bytes of a [`Block`] and of every base-PRF key.
pub const BLOCK_SIZE: usize = 16;

/// Deterministic pseudorandom function underlying the synthesizer.
///
/// Implementations must be pure: identical `(key, message)` pairs always
/// produce identical output, with no observable side effects.  Outputs
/// under distinct keys must be computationally independent under the
/// usual PRF assumption for the chosen primitive.
pub trait BasePrf {
    /// Applies the PRF to `message` under `key`, returning a full block.
    ///
    /// Fails with [`CprfError::KeyLength`] when `key` is not exactly
    /// [`BLOCK_SIZE`] bytes.
    fn apply(&self, key: &[u8], message: &[u8]) -> Result<Block, CprfError>;
}

/// The RFC 4493 AES-CMAC instantiation of [`BasePrf`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AesCmacPrf;

impl BasePrf for AesCmacPrf {
    fn apply(&self, key: &[u8], message: &[u8]) -> Result<Block, CprfError> {
        let mut mac = Cmac::<Aes128>::new_from_slice(key)
            .map_err(|_| CprfError::KeyLength { len: key.len() })?;
        mac.update(message);
        let tag = mac.finalize().into_bytes();
        let mut out = [0u8; BLOCK_SIZE];
        out.copy_from_slice(&tag);
        Ok(out)
    }
}

/// Renders a block as lowercase hex, the form used in logs and vectors.
pub fn block_to_hex(block: &Block) -> String {
    hex::encode(block)
}
