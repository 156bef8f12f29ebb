//! Input validation: declared-type size checks and ingestion.

use crate::address::Address;
use crate::convert::Derived;
use crate::error::Error;
use crate::private_key::{PrivateKey, PRIVATE_KEY_SIZE};
use crate::public_key::PublicKey;
use crate::types::Representation;
use crate::wif::{Wif, WIF_COMPRESSED_SIZE, WIF_UNCOMPRESSED_SIZE};
use crate::Result;

/// Check decoded raw bytes against the declared representation and place
/// them in a fresh derivation store.
///
/// A private key whose length matches a WIF payload gets a hint pointing at
/// the likely flag mix-up; every other mismatch is a plain size error.
pub fn ingest(raw: &[u8], representation: Representation) -> Result<Derived> {
    let mut derived = Derived::default();

    match representation {
        Representation::PrivateKey => {
            if raw.len() != PRIVATE_KEY_SIZE {
                let hint = matches!(raw.len(), WIF_UNCOMPRESSED_SIZE | WIF_COMPRESSED_SIZE)
                    .then_some("did you mean \"--input-type private-key-wif\"?");
                return Err(Error::WrongSize {
                    representation,
                    actual: raw.len(),
                    hint,
                });
            }
            derived.set_private_key(PrivateKey::from_bytes(raw)?);
        }
        Representation::PrivateKeyWif => {
            derived.set_private_key_wif(Wif::from_bytes(raw)?);
        }
        Representation::PublicKey => {
            derived.set_public_key(PublicKey::from_bytes(raw)?);
        }
        Representation::PublicKeySha256 => {
            let hash: [u8; 32] = raw.try_into().map_err(|_| Error::WrongSize {
                representation,
                actual: raw.len(),
                hint: None,
            })?;
            derived.set_public_key_sha256(hash);
        }
        Representation::PublicKeyRipemd160 => {
            let hash: [u8; 20] = raw.try_into().map_err(|_| Error::WrongSize {
                representation,
                actual: raw.len(),
                hint: None,
            })?;
            derived.set_public_key_ripemd160(hash);
        }
        Representation::Address => {
            derived.set_address(Address::from_bytes(raw)?);
        }
    }

    Ok(derived)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Representation as R;

    #[test]
    fn test_ingest_sets_exactly_the_declared_slot() {
        let derived = ingest(&[0x11; 32], R::PrivateKey).unwrap();
        for r in R::ALL {
            assert_eq!(derived.is_set(r), r == R::PrivateKey);
        }
    }

    #[test]
    fn test_private_key_with_wif_length_gets_hint() {
        for len in [33, 34] {
            match ingest(&vec![0u8; len], R::PrivateKey) {
                Err(Error::WrongSize { hint: Some(hint), actual, .. }) => {
                    assert_eq!(actual, len);
                    assert!(hint.contains("private-key-wif"));
                }
                other => panic!("expected hinted WrongSize, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_private_key_other_mismatch_has_no_hint() {
        assert!(matches!(
            ingest(&[0u8; 31], R::PrivateKey),
            Err(Error::WrongSize { hint: None, actual: 31, .. })
        ));
    }

    #[test]
    fn test_wif_length_resolves_compression() {
        let derived = ingest(&[0u8; 33], R::PrivateKeyWif).unwrap();
        assert_eq!(derived.wif_compressed(), Some(false));
        let derived = ingest(&[0u8; 34], R::PrivateKeyWif).unwrap();
        assert_eq!(derived.wif_compressed(), Some(true));
    }

    #[test]
    fn test_hash_sizes_enforced() {
        assert!(ingest(&[0u8; 32], R::PublicKeySha256).is_ok());
        assert!(ingest(&[0u8; 20], R::PublicKeyRipemd160).is_ok());
        assert!(matches!(
            ingest(&[0u8; 20], R::PublicKeySha256),
            Err(Error::WrongSize { actual: 20, .. })
        ));
        assert!(matches!(
            ingest(&[0u8; 21], R::PublicKeyRipemd160),
            Err(Error::WrongSize { actual: 21, .. })
        ));
    }

    #[test]
    fn test_public_key_both_lengths_accepted() {
        assert!(ingest(&[0x02; 33], R::PublicKey).is_ok());
        assert!(ingest(&[0x04; 65], R::PublicKey).is_ok());
        assert!(ingest(&[0x04; 66], R::PublicKey).is_err());
    }

    #[test]
    fn test_address_size_enforced() {
        assert!(ingest(&[0u8; 21], R::Address).is_ok());
        assert!(ingest(&[0u8; 25], R::Address).is_err());
    }
}
