//! The output dispatcher: single-value encoding and the "all" fan-out.

use std::io::Write;

use crate::convert::Derived;
use crate::encoding;
use crate::error::Error;
use crate::types::{Format, Representation};
use crate::Result;

/// Fan-out type order, address first, working back toward the private key.
pub const ALL_TYPE_ORDER: [Representation; 6] = [
    Representation::Address,
    Representation::PublicKeyRipemd160,
    Representation::PublicKeySha256,
    Representation::PublicKey,
    Representation::PrivateKeyWif,
    Representation::PrivateKey,
];

/// Fan-out format order. Raw is excluded: binary is not safe to
/// concatenate into a text listing.
pub const ALL_FORMAT_ORDER: [Format; 3] = [Format::Hex, Format::Base58, Format::Base58Check];

/// Write one resolved representation in the given format.
///
/// `Raw` writes the bytes verbatim. `newline` appends a trailing newline;
/// the caller passes whether stdin is an interactive terminal.
pub fn write_value<W: Write>(
    out: &mut W,
    derived: &Derived,
    representation: Representation,
    format: Format,
    newline: bool,
) -> Result<()> {
    let raw = derived
        .raw(representation)
        .ok_or(Error::Unspecified("output value"))?;

    match format {
        Format::Raw => out.write_all(&raw)?,
        _ => out.write_all(encoding::encode_text(format, &raw)?.as_bytes())?,
    }
    if newline {
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Write every set representation crossed with every text format, one
/// `type.format:text` line each.
///
/// Any encode failure aborts the whole dispatch; there is no best-effort
/// partial listing.
pub fn write_all<W: Write>(out: &mut W, derived: &Derived) -> Result<()> {
    for representation in ALL_TYPE_ORDER {
        let Some(raw) = derived.raw(representation) else {
            continue;
        };
        for format in ALL_FORMAT_ORDER {
            let text = encoding::encode_text(format, &raw)?;
            writeln!(out, "{}.{}:{}", representation.name(), format.name(), text)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{convert, Target};
    use crate::types::Compression;
    use crate::types::Representation as R;
    use crate::validate::ingest;

    fn derived_from_private_key() -> Derived {
        let key = hex_literal::hex!(
            "0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d"
        );
        let mut derived = ingest(&key, R::PrivateKey).unwrap();
        convert(&mut derived, R::PrivateKey, Target::All, Compression::Compressed).unwrap();
        derived
    }

    #[test]
    fn test_all_emits_eighteen_lines_in_fixed_order() {
        let derived = derived_from_private_key();
        let mut out = Vec::new();
        write_all(&mut out, &derived).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 18);

        assert_eq!(lines[0], "address.hex:00d9351dcbad5b8f3b8bfa2f2cdc85c28118ca9326");
        assert_eq!(lines[1], "address.base58:142WgfVoHYiUgmbbW8Ag2AcC6q3TB");
        assert_eq!(
            lines[2],
            "address.base58check:1LoVGDgRs9hTfTNJNuXKSpywcbdvwRXpmK"
        );
        assert_eq!(
            lines[3],
            "public-key-ripemd160.hex:d9351dcbad5b8f3b8bfa2f2cdc85c28118ca9326"
        );
        assert_eq!(
            lines[17],
            "private-key.base58check:6Mcb23muAxyXaSMhmB6B1mqkvLdWhtuFZmnZsxDczHRuwmNTF"
        );
    }

    #[test]
    fn test_all_skips_unreachable_representations() {
        let payload = hex_literal::hex!("00a65d1a239d4ec666643d350c7bb8fc44d2881128");
        let mut derived = ingest(&payload, R::Address).unwrap();
        convert(&mut derived, R::Address, Target::All, Compression::Auto).unwrap();

        let mut out = Vec::new();
        write_all(&mut out, &derived).unwrap();
        let text = String::from_utf8(out).unwrap();
        // Address + hash160 only: 2 types x 3 formats.
        assert_eq!(text.lines().count(), 6);
        assert!(text.lines().all(|line| {
            line.starts_with("address.") || line.starts_with("public-key-ripemd160.")
        }));
    }

    #[test]
    fn test_single_value_hex_without_newline() {
        let derived = derived_from_private_key();
        let mut out = Vec::new();
        write_value(&mut out, &derived, R::PublicKey, Format::Hex, false).unwrap();
        assert_eq!(
            out,
            b"02d0de0aaeaefad02b8bdc8a01a1b8b11c696bd3d66a2c5f10780d95b7df42645c"
        );
    }

    #[test]
    fn test_single_value_appends_newline_when_interactive() {
        let derived = derived_from_private_key();
        let mut out = Vec::new();
        write_value(&mut out, &derived, R::Address, Format::Base58Check, true).unwrap();
        assert_eq!(out, b"1LoVGDgRs9hTfTNJNuXKSpywcbdvwRXpmK\n");
    }

    #[test]
    fn test_single_value_raw_writes_bytes_verbatim() {
        let derived = derived_from_private_key();
        let mut out = Vec::new();
        write_value(&mut out, &derived, R::PublicKeyRipemd160, Format::Raw, false).unwrap();
        assert_eq!(
            out,
            hex_literal::hex!("d9351dcbad5b8f3b8bfa2f2cdc85c28118ca9326").to_vec()
        );
    }

    #[test]
    fn test_unset_value_is_an_error() {
        let payload = hex_literal::hex!("00a65d1a239d4ec666643d350c7bb8fc44d2881128");
        let derived = ingest(&payload, R::Address).unwrap();
        let mut out = Vec::new();
        let result = write_value(&mut out, &derived, R::PublicKey, Format::Hex, false);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
