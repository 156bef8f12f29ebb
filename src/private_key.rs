//! Raw secp256k1 private key.

use k256::ecdsa::SigningKey;
use zeroize::Zeroize;

use crate::error::Error;
use crate::public_key::PublicKey;
use crate::types::Representation;
use crate::Result;

/// Raw private key size in bytes.
pub const PRIVATE_KEY_SIZE: usize = 32;

/// A raw secp256k1 private key with its public key compression tag.
///
/// The tag decides whether derivation produces a 33- or 65-byte public key
/// and whether the WIF payload carries a compression flag.
#[derive(Clone)]
pub struct PrivateKey {
    bytes: [u8; PRIVATE_KEY_SIZE],
    compressed: bool,
}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
        self.compressed = false;
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl PrivateKey {
    /// Create from a raw 32-byte secret, uncompressed until told otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PRIVATE_KEY_SIZE {
            return Err(Error::WrongSize {
                representation: Representation::PrivateKey,
                actual: bytes.len(),
                hint: None,
            });
        }
        let mut raw = [0u8; PRIVATE_KEY_SIZE];
        raw.copy_from_slice(bytes);
        Ok(Self {
            bytes: raw,
            compressed: false,
        })
    }

    /// Set whether to derive a compressed public key.
    pub fn set_compressed(&mut self, compressed: bool) {
        self.compressed = compressed;
    }

    /// Check if derivation produces a compressed public key.
    pub const fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Serialize to the raw 32-byte secret.
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_SIZE] {
        self.bytes
    }

    /// Derive the corresponding public key via EC scalar multiplication.
    ///
    /// Fails with [`Error::Derivation`] if the secret is not a valid scalar
    /// (zero or not below the curve order).
    pub fn public_key(&self) -> Result<PublicKey> {
        let signing_key = SigningKey::from_slice(&self.bytes).map_err(|_| Error::Derivation)?;
        let point = signing_key.verifying_key().to_encoded_point(self.compressed);
        PublicKey::from_bytes(point.as_bytes())
    }
}

impl core::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PrivateKey([REDACTED], compressed={})", self.compressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_key_uncompressed() {
        let bytes =
            hex_literal::hex!("0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d");
        let key = PrivateKey::from_bytes(&bytes).unwrap();
        let public_key = key.public_key().unwrap();
        assert_eq!(
            hex::encode(public_key.as_bytes()),
            "04d0de0aaeaefad02b8bdc8a01a1b8b11c696bd3d66a2c5f10780d95b7df42645c\
             d85228a6fb29940e858e7e55842ae2bd115d1ed7cc0e82d934e929c97648cb0a"
        );
    }

    #[test]
    fn test_public_key_compressed() {
        let bytes =
            hex_literal::hex!("0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d");
        let mut key = PrivateKey::from_bytes(&bytes).unwrap();
        key.set_compressed(true);
        let public_key = key.public_key().unwrap();
        assert_eq!(
            hex::encode(public_key.as_bytes()),
            "02d0de0aaeaefad02b8bdc8a01a1b8b11c696bd3d66a2c5f10780d95b7df42645c"
        );
    }

    #[test]
    fn test_zero_scalar_fails_at_derivation() {
        let key = PrivateKey::from_bytes(&[0u8; 32]).unwrap();
        assert!(matches!(key.public_key(), Err(Error::Derivation)));
    }

    #[test]
    fn test_wrong_size_rejected() {
        assert!(matches!(
            PrivateKey::from_bytes(&[0u8; 31]),
            Err(Error::WrongSize { actual: 31, .. })
        ));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let bytes =
            hex_literal::hex!("0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d");
        let key = PrivateKey::from_bytes(&bytes).unwrap();
        let debug = format!("{key:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("0c28fca3"));
    }
}
