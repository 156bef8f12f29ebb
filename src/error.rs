//! Error types for key and address conversion.

use std::fmt;

use crate::types::{Format, Representation};

/// Errors that can occur during a conversion run.
///
/// All variants are terminal: the run aborts on the first error and nothing
/// is written to standard output.
#[derive(Debug)]
pub enum Error {
    /// Input text could not be decoded in the declared format.
    InvalidFormat {
        /// The format the input was declared to be in.
        format: Format,
        /// Decoder failure detail.
        reason: String,
    },
    /// Base58Check checksum did not match the payload.
    ChecksumMismatch,
    /// Decoded raw bytes do not match the declared type's expected size.
    WrongSize {
        /// The declared input representation.
        representation: Representation,
        /// Observed raw byte length.
        actual: usize,
        /// Optional diagnostic hint.
        hint: Option<&'static str>,
    },
    /// The requested output cannot be derived from the given input.
    ImpossibleConversion {
        /// Input representation.
        from: Representation,
        /// Requested output representation.
        to: Representation,
    },
    /// Elliptic curve derivation failed (e.g. scalar out of range).
    Derivation,
    /// A required type, format, or input source was not specified.
    Unspecified(&'static str),
    /// Input exceeds the fixed internal buffer capacity.
    InputTooLarge {
        /// Buffer capacity in bytes.
        capacity: usize,
        /// Observed input length.
        actual: usize,
    },
    /// Failed to read the input file.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { format, reason } => {
                write!(f, "failed to decode {format} input ({reason})")
            }
            Self::ChecksumMismatch => write!(f, "base58check checksum mismatch"),
            Self::WrongSize {
                representation,
                actual,
                hint,
            } => {
                write!(f, "invalid size input for {representation}: expected ")?;
                let sizes = representation.expected_sizes();
                for (i, size) in sizes.iter().enumerate() {
                    if i > 0 {
                        write!(f, " or ")?;
                    }
                    write!(f, "{size}")?;
                }
                write!(f, " bytes but got {actual} bytes")?;
                if let Some(hint) = hint {
                    write!(f, " ({hint})")?;
                }
                Ok(())
            }
            Self::ImpossibleConversion { from, to } => {
                write!(f, "impossible conversion: {to} cannot be derived from {from}")
            }
            Self::Derivation => write!(f, "public key derivation failed"),
            Self::Unspecified(what) => write!(f, "missing or unresolved {what}"),
            Self::InputTooLarge { capacity, actual } => write!(
                f,
                "input of {actual} bytes exceeds the {capacity}-byte buffer or any expected type"
            ),
            Self::Io(e) => write!(f, "failed to read input file ({e})"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
