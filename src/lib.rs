//! # btckey - Bitcoin Key and Address Conversion
//!
//! Converts a Bitcoin key or address between semantic representations
//! (private key, WIF, public key, its hashes, address) and between
//! serialization formats (raw, hex, Base58, Base58Check), in a single
//! synchronous pass: acquire, validate, convert, dispatch.
//!
//! The core is a small directed derivation graph: each edge is one
//! cryptographic or structural transform, and conversion walks the unique
//! path from the input representation to the requested output. Hashes and
//! EC multiplication are one-way, so most reverse requests are rejected as
//! impossible before any work is done.

#![warn(missing_docs, rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod address;
pub mod commands;
pub mod convert;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod input;
pub mod output;
pub mod private_key;
pub mod public_key;
pub mod types;
pub mod validate;
pub mod wif;

pub use address::Address;
pub use convert::{Derived, Target};
pub use error::Error;
pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use types::{Compression, Format, Representation};
pub use wif::Wif;

/// A convenient Result type alias for btckey operations.
pub type Result<T> = core::result::Result<T, Error>;
