//! Common types: value representations, serialization formats, compression.

use core::fmt;
use core::str::FromStr;

/// Semantic representations a Bitcoin key or address can take.
///
/// Declared in derivation order, starting from the private key. Every
/// representation further down the list is derived from the one before it,
/// except [`Self::PrivateKeyWif`] which sits beside the private key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Representation {
    /// Raw ECDSA private key (32 bytes).
    PrivateKey,
    /// Private key in Wallet Import Format payload (version + key + optional flag).
    PrivateKeyWif,
    /// SEC1 public key, compressed (33 bytes) or uncompressed (65 bytes).
    PublicKey,
    /// SHA-256 of the public key (32 bytes).
    PublicKeySha256,
    /// RIPEMD-160 of the SHA-256 of the public key (20 bytes).
    PublicKeyRipemd160,
    /// Bitcoin address payload: version byte + 20-byte hash (21 bytes).
    Address,
}

impl Representation {
    /// All representations, in derivation order.
    pub const ALL: [Self; 6] = [
        Self::PrivateKey,
        Self::PrivateKeyWif,
        Self::PublicKey,
        Self::PublicKeySha256,
        Self::PublicKeyRipemd160,
        Self::Address,
    ];

    /// Get the representation name as used in output listings.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PrivateKey => "private-key",
            Self::PrivateKeyWif => "private-key-wif",
            Self::PublicKey => "public-key",
            Self::PublicKeySha256 => "public-key-sha256",
            Self::PublicKeyRipemd160 => "public-key-ripemd160",
            Self::Address => "address",
        }
    }

    /// Valid raw byte lengths for this representation.
    ///
    /// Two entries mean the value is self-describing by length: a WIF payload
    /// is 33 bytes (uncompressed) or 34 (compressed), a public key 65
    /// (uncompressed) or 33 (compressed).
    #[must_use]
    pub const fn expected_sizes(self) -> &'static [usize] {
        match self {
            Self::PrivateKey | Self::PublicKeySha256 => &[32],
            Self::PrivateKeyWif => &[33, 34],
            Self::PublicKey => &[65, 33],
            Self::PublicKeyRipemd160 => &[20],
            Self::Address => &[21],
        }
    }

    /// Stable index, used for table lookups in the conversion engine.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an invalid representation name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseRepresentationError;

impl fmt::Display for ParseRepresentationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid type, expected: private-key, private-key-wif, public-key, \
             public-key-sha, public-key-rmd, or address"
        )
    }
}

impl std::error::Error for ParseRepresentationError {}

impl FromStr for Representation {
    type Err = ParseRepresentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "private-key" => Ok(Self::PrivateKey),
            "private-key-wif" => Ok(Self::PrivateKeyWif),
            "public-key" => Ok(Self::PublicKey),
            "public-key-sha" | "public-key-sha256" => Ok(Self::PublicKeySha256),
            "public-key-rmd" | "public-key-ripemd160" => Ok(Self::PublicKeyRipemd160),
            "address" => Ok(Self::Address),
            _ => Err(ParseRepresentationError),
        }
    }
}

/// Serialization formats for input decoding and output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Raw binary bytes.
    Raw,
    /// Lowercase hexadecimal.
    Hex,
    /// Plain Base58, no checksum.
    Base58,
    /// Base58 with a 4-byte double-SHA-256 checksum.
    Base58Check,
}

impl Format {
    /// Get the format name as used in output listings.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Hex => "hex",
            Self::Base58 => "base58",
            Self::Base58Check => "base58check",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an invalid format name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseFormatError;

impl fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid format, expected: raw, hex, base58, or base58check")
    }
}

impl std::error::Error for ParseFormatError {}

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(Self::Raw),
            "hex" => Ok(Self::Hex),
            "base58" => Ok(Self::Base58),
            "base58check" => Ok(Self::Base58Check),
            _ => Err(ParseFormatError),
        }
    }
}

/// Public key compression policy.
///
/// `Auto` defers to the compression flag carried by a decoded WIF key; for
/// raw or hex private key input there is no flag to read and `Auto` falls
/// back to uncompressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// Take the compression flag from the WIF input, default uncompressed.
    #[default]
    Auto,
    /// Force a compressed public key.
    Compressed,
    /// Force an uncompressed public key.
    Uncompressed,
}

impl Compression {
    /// Resolve the policy into a concrete compression choice.
    ///
    /// `wif_compressed` is the flag observed on a decoded WIF input, if any.
    #[must_use]
    pub fn resolve(self, wif_compressed: Option<bool>) -> bool {
        match self {
            Self::Compressed => true,
            Self::Uncompressed => false,
            Self::Auto => wif_compressed.unwrap_or(false),
        }
    }
}
