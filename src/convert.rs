//! The conversion engine: derivation graph and derivation-result store.
//!
//! The graph is an explicit edge table. Planning a conversion
//! ([`route`]) is separate from executing it ([`convert`]), so
//! reachability policy is testable without touching any cryptography.

use std::collections::VecDeque;

use crate::address::Address;
use crate::error::Error;
use crate::hash;
use crate::private_key::PrivateKey;
use crate::public_key::PublicKey;
use crate::types::{Compression, Representation};
use crate::wif::Wif;
use crate::Result;

/// One directed derivation step.
pub type Edge = (Representation, Representation);

/// Every derivation the tool knows how to perform.
///
/// `Address -> PublicKeyRipemd160` is the only edge against the derivation
/// direction: the version byte is structural, not cryptographic. Hashes and
/// EC multiplication are one-way, so no other reverse edges exist.
pub const EDGES: [Edge; 7] = [
    (Representation::PrivateKey, Representation::PrivateKeyWif),
    (Representation::PrivateKeyWif, Representation::PrivateKey),
    (Representation::PrivateKey, Representation::PublicKey),
    (Representation::PublicKey, Representation::PublicKeySha256),
    (Representation::PublicKeySha256, Representation::PublicKeyRipemd160),
    (Representation::PublicKeyRipemd160, Representation::Address),
    (Representation::Address, Representation::PublicKeyRipemd160),
];

/// Requested conversion output: one representation, or everything reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A single output representation.
    One(Representation),
    /// Every representation derivable from the input.
    All,
}

/// Plan the edge sequence from `from` to `to`.
///
/// Fails with [`Error::ImpossibleConversion`] before any capability is
/// invoked when no path exists, e.g. recovering a private key from a public
/// key.
pub fn route(from: Representation, to: Representation) -> Result<Vec<Edge>> {
    if from == to {
        return Ok(Vec::new());
    }

    // BFS over the edge table; `prev` doubles as the visited set.
    let mut prev: [Option<Representation>; 6] = [None; 6];
    prev[from.index()] = Some(from);
    let mut queue = VecDeque::from([from]);

    while let Some(node) = queue.pop_front() {
        for (a, b) in EDGES {
            if a == node && prev[b.index()].is_none() {
                prev[b.index()] = Some(a);
                if b == to {
                    let mut path = Vec::new();
                    let mut current = to;
                    while current != from {
                        match prev[current.index()] {
                            Some(p) => {
                                path.push((p, current));
                                current = p;
                            }
                            None => return Err(Error::ImpossibleConversion { from, to }),
                        }
                    }
                    path.reverse();
                    return Ok(path);
                }
                queue.push_back(b);
            }
        }
    }

    Err(Error::ImpossibleConversion { from, to })
}

/// Derivation results for one run, one slot per representation.
///
/// Exactly one slot is set from decoded input at run start; each further
/// slot is written at most once, by the edge that derives it.
#[derive(Debug, Default)]
pub struct Derived {
    private_key: Option<PrivateKey>,
    private_key_wif: Option<Wif>,
    public_key: Option<PublicKey>,
    public_key_sha256: Option<[u8; 32]>,
    public_key_ripemd160: Option<[u8; 20]>,
    address: Option<Address>,
    /// Compression choice, resolved once per run before any derivation.
    compressed: bool,
}

impl Derived {
    /// Check whether a representation has been produced in this run.
    #[must_use]
    pub fn is_set(&self, representation: Representation) -> bool {
        match representation {
            Representation::PrivateKey => self.private_key.is_some(),
            Representation::PrivateKeyWif => self.private_key_wif.is_some(),
            Representation::PublicKey => self.public_key.is_some(),
            Representation::PublicKeySha256 => self.public_key_sha256.is_some(),
            Representation::PublicKeyRipemd160 => self.public_key_ripemd160.is_some(),
            Representation::Address => self.address.is_some(),
        }
    }

    /// Raw bytes of a produced representation, if set.
    #[must_use]
    pub fn raw(&self, representation: Representation) -> Option<Vec<u8>> {
        match representation {
            Representation::PrivateKey => {
                self.private_key.as_ref().map(|k| k.to_bytes().to_vec())
            }
            Representation::PrivateKeyWif => {
                self.private_key_wif.as_ref().map(|w| w.as_bytes().to_vec())
            }
            Representation::PublicKey => self.public_key.as_ref().map(|k| k.as_bytes().to_vec()),
            Representation::PublicKeySha256 => self.public_key_sha256.map(|h| h.to_vec()),
            Representation::PublicKeyRipemd160 => self.public_key_ripemd160.map(|h| h.to_vec()),
            Representation::Address => self.address.as_ref().map(|a| a.as_bytes().to_vec()),
        }
    }

    /// Compression flag of the WIF input, if the run started from one.
    #[must_use]
    pub fn wif_compressed(&self) -> Option<bool> {
        self.private_key_wif.as_ref().map(Wif::is_compressed)
    }

    pub(crate) fn set_private_key(&mut self, key: PrivateKey) {
        debug_assert!(self.private_key.is_none());
        self.private_key = Some(key);
    }

    pub(crate) fn set_private_key_wif(&mut self, wif: Wif) {
        debug_assert!(self.private_key_wif.is_none());
        self.private_key_wif = Some(wif);
    }

    pub(crate) fn set_public_key(&mut self, key: PublicKey) {
        debug_assert!(self.public_key.is_none());
        self.public_key = Some(key);
    }

    pub(crate) fn set_public_key_sha256(&mut self, hash: [u8; 32]) {
        debug_assert!(self.public_key_sha256.is_none());
        self.public_key_sha256 = Some(hash);
    }

    pub(crate) fn set_public_key_ripemd160(&mut self, hash: [u8; 20]) {
        debug_assert!(self.public_key_ripemd160.is_none());
        self.public_key_ripemd160 = Some(hash);
    }

    pub(crate) fn set_address(&mut self, address: Address) {
        debug_assert!(self.address.is_none());
        self.address = Some(address);
    }

    /// Resolve the compression policy against the WIF input (if any) and
    /// freeze the result for the rest of the run.
    fn resolve_compression(&mut self, mode: Compression) {
        self.compressed = mode.resolve(self.wif_compressed());
        if let Some(key) = self.private_key.as_mut() {
            key.set_compressed(self.compressed);
        }
    }

    /// Perform one derivation step. Already-set targets are left untouched.
    fn apply(&mut self, edge: Edge) -> Result<()> {
        if self.is_set(edge.1) {
            return Ok(());
        }

        const MISSING: Error = Error::Unspecified("conversion source value");
        match edge {
            (Representation::PrivateKey, Representation::PrivateKeyWif) => {
                let wif = Wif::from_private_key(self.private_key.as_ref().ok_or(MISSING)?);
                self.set_private_key_wif(wif);
            }
            (Representation::PrivateKeyWif, Representation::PrivateKey) => {
                let mut key = self.private_key_wif.as_ref().ok_or(MISSING)?.private_key()?;
                key.set_compressed(self.compressed);
                self.set_private_key(key);
            }
            (Representation::PrivateKey, Representation::PublicKey) => {
                let public_key = self.private_key.as_ref().ok_or(MISSING)?.public_key()?;
                self.set_public_key(public_key);
            }
            (Representation::PublicKey, Representation::PublicKeySha256) => {
                let sha = hash::sha256(self.public_key.as_ref().ok_or(MISSING)?.as_bytes());
                self.set_public_key_sha256(sha);
            }
            (Representation::PublicKeySha256, Representation::PublicKeyRipemd160) => {
                let rmd = hash::ripemd160(self.public_key_sha256.as_ref().ok_or(MISSING)?);
                self.set_public_key_ripemd160(rmd);
            }
            (Representation::PublicKeyRipemd160, Representation::Address) => {
                let address =
                    Address::from_hash160(self.public_key_ripemd160.as_ref().ok_or(MISSING)?);
                self.set_address(address);
            }
            (Representation::Address, Representation::PublicKeyRipemd160) => {
                let hash = self.address.as_ref().ok_or(MISSING)?.hash160();
                self.set_public_key_ripemd160(hash);
            }
            _ => return Err(Error::ImpossibleConversion { from: edge.0, to: edge.1 }),
        }
        Ok(())
    }
}

/// Convert the input representation to the target, deriving every
/// representation on the way.
///
/// Resolves the compression policy first, then either walks the unique path
/// to a single target or derives the closure of everything reachable for
/// [`Target::All`]. Any capability failure aborts with the originating
/// error and leaves no further slots written.
pub fn convert(
    derived: &mut Derived,
    input: Representation,
    target: Target,
    mode: Compression,
) -> Result<()> {
    derived.resolve_compression(mode);

    match target {
        Target::One(to) => {
            for edge in route(input, to)? {
                derived.apply(edge)?;
            }
        }
        Target::All => loop {
            let mut progressed = false;
            for edge in EDGES {
                if derived.is_set(edge.0) && !derived.is_set(edge.1) {
                    derived.apply(edge)?;
                    progressed = true;
                }
            }
            if !progressed {
                break;
            }
        },
    }
    Ok(())
}
