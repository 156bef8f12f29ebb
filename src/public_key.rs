//! SEC1-encoded secp256k1 public key buffer.

use crate::error::Error;
use crate::types::Representation;
use crate::Result;

/// Compressed public key size (prefix 0x02/0x03 + x coordinate).
pub const PUBLIC_KEY_COMPRESSED_SIZE: usize = 33;
/// Uncompressed public key size (prefix 0x04 + x and y coordinates).
pub const PUBLIC_KEY_UNCOMPRESSED_SIZE: usize = 65;

/// A SEC1-encoded public key, self-describing by length.
///
/// Holds the bytes as given: the tool validates by size only and never needs
/// to evaluate the curve point, so an off-curve input converts the same way
/// the original bytes would.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    bytes: [u8; PUBLIC_KEY_UNCOMPRESSED_SIZE],
    len: usize,
}

impl PublicKey {
    /// Create from SEC1 bytes, compressed (33) or uncompressed (65).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes.len() {
            PUBLIC_KEY_COMPRESSED_SIZE | PUBLIC_KEY_UNCOMPRESSED_SIZE => {
                let mut raw = [0u8; PUBLIC_KEY_UNCOMPRESSED_SIZE];
                raw[..bytes.len()].copy_from_slice(bytes);
                Ok(Self {
                    bytes: raw,
                    len: bytes.len(),
                })
            }
            actual => Err(Error::WrongSize {
                representation: Representation::PublicKey,
                actual,
                hint: None,
            }),
        }
    }

    /// Check if this is the compressed form.
    pub const fn is_compressed(&self) -> bool {
        self.len == PUBLIC_KEY_COMPRESSED_SIZE
    }

    /// The SEC1 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl core::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.as_bytes()))
    }
}
