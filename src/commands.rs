//! CLI argument surface and the conversion pipeline driver.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colored::Colorize;

use crate::convert::{self, Target};
use crate::error::Error;
use crate::types::{Compression, Format, Representation};
use crate::{encoding, input, output, validate, Result};

/// Convert Bitcoin keys and addresses between representations and encodings.
#[derive(Parser)]
#[command(name = "btckey")]
#[command(version, about, long_about = None)]
#[command(after_help = "\
Examples:
  Show address for a WIF private key:
    btckey --input-type private-key-wif --input-format base58check \\
           --input 5J2YUwNA5hmZFW33nbUCp5TmvszYXxVYthqDv7axSisBjFJMqaT \\
           --output-type address --output-format base58check

  Show everything for a raw private key:
    btckey --input-type private-key --input-format raw \\
           --input-file key.bin --output-type all \\
           --public-key-compression compressed")]
pub struct Cli {
    /// Input data type.
    #[arg(long, value_enum)]
    input_type: Option<InputTypeArg>,

    /// Input data format.
    #[arg(long, value_enum)]
    input_format: Option<FormatArg>,

    /// Output data type.
    #[arg(long, value_enum)]
    output_type: Option<OutputTypeArg>,

    /// Output data format (ignored for --output-type all).
    #[arg(long, value_enum)]
    output_format: Option<FormatArg>,

    /// Input data.
    #[arg(long)]
    input: Option<String>,

    /// Read input data from this file.
    #[arg(long)]
    input_file: Option<PathBuf>,

    /// Public key compression. Auto takes the flag from a WIF input and
    /// falls back to uncompressed for raw or hex keys.
    #[arg(long, value_enum, default_value = "auto")]
    public_key_compression: CompressionArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum InputTypeArg {
    /// ECDSA private key
    PrivateKey,
    /// Private key in Wallet Import Format
    PrivateKeyWif,
    /// ECDSA public key
    PublicKey,
    /// SHA256(public key)
    #[value(name = "public-key-sha")]
    PublicKeySha,
    /// RIPEMD160(SHA256(public key))
    #[value(name = "public-key-rmd")]
    PublicKeyRmd,
    /// Bitcoin address (version + hash)
    Address,
}

impl From<InputTypeArg> for Representation {
    fn from(val: InputTypeArg) -> Self {
        match val {
            InputTypeArg::PrivateKey => Self::PrivateKey,
            InputTypeArg::PrivateKeyWif => Self::PrivateKeyWif,
            InputTypeArg::PublicKey => Self::PublicKey,
            InputTypeArg::PublicKeySha => Self::PublicKeySha256,
            InputTypeArg::PublicKeyRmd => Self::PublicKeyRipemd160,
            InputTypeArg::Address => Self::Address,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputTypeArg {
    /// ECDSA private key
    PrivateKey,
    /// Private key in Wallet Import Format
    PrivateKeyWif,
    /// ECDSA public key
    PublicKey,
    /// SHA256(public key)
    #[value(name = "public-key-sha")]
    PublicKeySha,
    /// RIPEMD160(SHA256(public key))
    #[value(name = "public-key-rmd")]
    PublicKeyRmd,
    /// Bitcoin address (version + hash)
    Address,
    /// Every derivable type, one type.format:value line each
    All,
}

impl From<OutputTypeArg> for Target {
    fn from(val: OutputTypeArg) -> Self {
        match val {
            OutputTypeArg::PrivateKey => Self::One(Representation::PrivateKey),
            OutputTypeArg::PrivateKeyWif => Self::One(Representation::PrivateKeyWif),
            OutputTypeArg::PublicKey => Self::One(Representation::PublicKey),
            OutputTypeArg::PublicKeySha => Self::One(Representation::PublicKeySha256),
            OutputTypeArg::PublicKeyRmd => Self::One(Representation::PublicKeyRipemd160),
            OutputTypeArg::Address => Self::One(Representation::Address),
            OutputTypeArg::All => Self::All,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Raw binary data
    Raw,
    /// Hexadecimal
    Hex,
    /// Base58
    Base58,
    /// Base58 with checksum
    #[value(name = "base58check")]
    Base58Check,
}

impl From<FormatArg> for Format {
    fn from(val: FormatArg) -> Self {
        match val {
            FormatArg::Raw => Self::Raw,
            FormatArg::Hex => Self::Hex,
            FormatArg::Base58 => Self::Base58,
            FormatArg::Base58Check => Self::Base58Check,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CompressionArg {
    /// Take compression from the WIF input (default)
    Auto,
    /// Force compressed public key
    Compressed,
    /// Force uncompressed public key
    Uncompressed,
}

impl From<CompressionArg> for Compression {
    fn from(val: CompressionArg) -> Self {
        match val {
            CompressionArg::Auto => Self::Auto,
            CompressionArg::Compressed => Self::Compressed,
            CompressionArg::Uncompressed => Self::Uncompressed,
        }
    }
}

impl Cli {
    /// Run the conversion: acquire, decode, validate, convert, dispatch.
    pub fn execute(self) -> Result<()> {
        let input_type: Representation = self
            .input_type
            .ok_or(Error::Unspecified("--input-type"))?
            .into();
        let input_format: Format = self
            .input_format
            .ok_or(Error::Unspecified("--input-format"))?
            .into();
        let target: Target = self
            .output_type
            .ok_or(Error::Unspecified("--output-type"))?
            .into();
        let compression: Compression = self.public_key_compression.into();

        if matches!(input_format, Format::Base58Check)
            && self.public_key_compression != CompressionArg::Auto
        {
            eprintln!(
                "{} overriding the compression of a base58check-encoded key is \
                 very unusual, please be sure what you are doing",
                "warning:".yellow().bold()
            );
        }

        let text = input::acquire(self.input.as_deref(), self.input_file.as_deref())?;
        let raw = encoding::decode(input_format, &text)?;
        let mut derived = validate::ingest(&raw, input_type)?;
        convert::convert(&mut derived, input_type, target, compression)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match target {
            Target::All => output::write_all(&mut out, &derived)?,
            Target::One(representation) => {
                let output_format: Format = self
                    .output_format
                    .ok_or(Error::Unspecified("--output-format"))?
                    .into();
                // Newline for clarity only when driven from a terminal.
                let newline = io::stdin().is_terminal();
                output::write_value(&mut out, &derived, representation, output_format, newline)?;
            }
        }
        out.flush()?;

        Ok(())
    }
}
