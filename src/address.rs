//! Bitcoin address payload: version byte plus public key hash.

use crate::error::Error;
use crate::types::Representation;
use crate::Result;

/// Version byte for mainnet pay-to-pubkey-hash addresses.
pub const ADDRESS_VERSION: u8 = 0x00;
/// Address payload size: version byte + 20-byte hash160.
pub const ADDRESS_SIZE: usize = 21;

/// A raw address payload (before any Base58Check coat).
#[derive(Clone, PartialEq, Eq)]
pub struct Address {
    bytes: [u8; ADDRESS_SIZE],
}

impl Address {
    /// Create from a decoded 21-byte payload.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ADDRESS_SIZE {
            return Err(Error::WrongSize {
                representation: Representation::Address,
                actual: bytes.len(),
                hint: None,
            });
        }
        let mut raw = [0u8; ADDRESS_SIZE];
        raw.copy_from_slice(bytes);
        Ok(Self { bytes: raw })
    }

    /// Build by prepending the version byte to a hash160.
    pub fn from_hash160(hash: &[u8; 20]) -> Self {
        let mut raw = [0u8; ADDRESS_SIZE];
        raw[0] = ADDRESS_VERSION;
        raw[1..].copy_from_slice(hash);
        Self { bytes: raw }
    }

    /// Strip the version byte, recovering the hash160.
    pub fn hash160(&self) -> [u8; 20] {
        let mut hash = [0u8; 20];
        hash.copy_from_slice(&self.bytes[1..]);
        hash
    }

    /// The raw payload bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl core::fmt::Debug for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Address({})", hex::encode(self.bytes))
    }
}
