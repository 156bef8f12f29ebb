//! Wallet Import Format payload for private keys.

use zeroize::Zeroize;

use crate::error::Error;
use crate::private_key::{PrivateKey, PRIVATE_KEY_SIZE};
use crate::types::Representation;
use crate::Result;

/// WIF version byte for mainnet private keys.
pub const WIF_VERSION: u8 = 0x80;
/// Trailing flag byte marking a compressed public key.
pub const WIF_COMPRESSION_FLAG: u8 = 0x01;

/// Payload size without the compression flag.
pub const WIF_UNCOMPRESSED_SIZE: usize = 1 + PRIVATE_KEY_SIZE;
/// Payload size with the compression flag appended.
pub const WIF_COMPRESSED_SIZE: usize = WIF_UNCOMPRESSED_SIZE + 1;

/// The raw WIF payload: version byte, 32-byte key, and a compression flag
/// iff the corresponding public key is compressed.
///
/// This is the value between the Base58Check coat and the bare private key;
/// which coat it wears is decided by the output format, not here.
#[derive(Clone)]
pub struct Wif {
    bytes: [u8; WIF_COMPRESSED_SIZE],
    len: usize,
}

impl Zeroize for Wif {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
        self.len = 0;
    }
}

impl Drop for Wif {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Wif {
    /// Create from a decoded payload of 33 (uncompressed) or 34 (compressed)
    /// bytes. The observed length is the only compression signal.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes.len() {
            WIF_UNCOMPRESSED_SIZE | WIF_COMPRESSED_SIZE => {
                let mut raw = [0u8; WIF_COMPRESSED_SIZE];
                raw[..bytes.len()].copy_from_slice(bytes);
                Ok(Self {
                    bytes: raw,
                    len: bytes.len(),
                })
            }
            actual => Err(Error::WrongSize {
                representation: Representation::PrivateKeyWif,
                actual,
                hint: None,
            }),
        }
    }

    /// Build the payload from a private key, honoring its compression tag.
    pub fn from_private_key(key: &PrivateKey) -> Self {
        let mut raw = [0u8; WIF_COMPRESSED_SIZE];
        raw[0] = WIF_VERSION;
        raw[1..=PRIVATE_KEY_SIZE].copy_from_slice(&key.to_bytes());

        let len = if key.is_compressed() {
            raw[WIF_UNCOMPRESSED_SIZE] = WIF_COMPRESSION_FLAG;
            WIF_COMPRESSED_SIZE
        } else {
            WIF_UNCOMPRESSED_SIZE
        };

        Self { bytes: raw, len }
    }

    /// Whether the payload carries the compression flag.
    pub const fn is_compressed(&self) -> bool {
        self.len == WIF_COMPRESSED_SIZE
    }

    /// Strip version byte and flag, yielding the bare private key with the
    /// compression tag this payload declares.
    pub fn private_key(&self) -> Result<PrivateKey> {
        let mut key = PrivateKey::from_bytes(&self.bytes[1..=PRIVATE_KEY_SIZE])?;
        key.set_compressed(self.is_compressed());
        Ok(key)
    }

    /// The raw payload bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl core::fmt::Debug for Wif {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Wif([REDACTED], compressed={})", self.is_compressed())
    }
}
