//! The codec: hex, Base58, and Base58Check encoding and decoding.

use crate::error::Error;
use crate::hash::double_sha256;
use crate::types::Format;
use crate::Result;

/// Encode bytes to Base58Check: payload + first 4 bytes of
/// double-SHA-256(payload), Base58 encoded.
pub fn base58check_encode(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + 4);
    data.extend_from_slice(payload);

    let checksum = double_sha256(payload);
    data.extend_from_slice(&checksum[..4]);

    bs58::encode(data).into_string()
}

/// Decode a Base58Check string, verifying and stripping the checksum.
pub fn base58check_decode(encoded: &str) -> Result<Vec<u8>> {
    let data = bs58::decode(encoded).into_vec().map_err(|e| Error::InvalidFormat {
        format: Format::Base58Check,
        reason: e.to_string(),
    })?;

    if data.len() < 5 {
        return Err(Error::InvalidFormat {
            format: Format::Base58Check,
            reason: format!("decoded to {} bytes, too short for a checksum", data.len()),
        });
    }

    let (payload, checksum) = data.split_at(data.len() - 4);
    let computed = double_sha256(payload);

    if checksum != &computed[..4] {
        return Err(Error::ChecksumMismatch);
    }

    Ok(payload.to_vec())
}

/// Decode input bytes in the given format into raw bytes.
///
/// Text formats tolerate surrounding ASCII whitespace (a file input almost
/// always ends in a newline); raw input is passed through untouched.
pub fn decode(format: Format, input: &[u8]) -> Result<Vec<u8>> {
    match format {
        Format::Raw => Ok(input.to_vec()),
        Format::Hex => {
            let text = text_input(format, input)?;
            hex::decode(text).map_err(|e| Error::InvalidFormat {
                format,
                reason: e.to_string(),
            })
        }
        Format::Base58 => {
            let text = text_input(format, input)?;
            bs58::decode(text).into_vec().map_err(|e| Error::InvalidFormat {
                format,
                reason: e.to_string(),
            })
        }
        Format::Base58Check => base58check_decode(text_input(format, input)?),
    }
}

/// Encode raw bytes in a text format.
///
/// `Raw` has no text form; the output dispatcher writes those bytes directly.
pub fn encode_text(format: Format, raw: &[u8]) -> Result<String> {
    match format {
        Format::Raw => Err(Error::Unspecified("text encoding for raw format")),
        Format::Hex => Ok(hex::encode(raw)),
        Format::Base58 => Ok(bs58::encode(raw).into_string()),
        Format::Base58Check => Ok(base58check_encode(raw)),
    }
}

fn text_input(format: Format, input: &[u8]) -> Result<&str> {
    let text = std::str::from_utf8(input).map_err(|e| Error::InvalidFormat {
        format,
        reason: e.to_string(),
    })?;
    Ok(text.trim_matches(|c: char| c.is_ascii_whitespace()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base58check_encode_address() {
        // Genesis block P2PKH address payload (version 0x00 + hash160)
        let payload = hex_literal::hex!("0062e907b15cbf27d5425399ebf6f0fb50ebb88f18");
        assert_eq!(
            base58check_encode(&payload),
            "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"
        );
    }

    #[test]
    fn test_base58check_encode_wif_uncompressed() {
        let payload = hex_literal::hex!(
            "800c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d"
        );
        assert_eq!(
            base58check_encode(&payload),
            "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ"
        );
    }

    #[test]
    fn test_base58check_encode_wif_compressed() {
        let payload = hex_literal::hex!(
            "800c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d01"
        );
        assert_eq!(
            base58check_encode(&payload),
            "KwdMAjGmerYanjeui5SHS7JkmpZvVipYvB2LJGU1ZxJwYvP98617"
        );
    }

    #[test]
    fn test_base58check_decode() {
        let payload = base58check_decode("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa").unwrap();
        assert_eq!(
            payload,
            hex_literal::hex!("0062e907b15cbf27d5425399ebf6f0fb50ebb88f18").to_vec()
        );
    }

    #[test]
    fn test_base58check_decode_corrupted_checksum() {
        // Last character changed; decode must fail and return no bytes.
        let result = base58check_decode("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNb");
        assert!(matches!(result, Err(Error::ChecksumMismatch)));
    }

    #[test]
    fn test_base58check_decode_too_short() {
        assert!(base58check_decode("1234").is_err());
    }

    #[test]
    fn test_base58check_decode_invalid_alphabet() {
        // 0, O, I, l are not in the Base58 alphabet
        assert!(matches!(
            base58check_decode("0OIl"),
            Err(Error::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_decode_raw_passthrough() {
        let input = [0x00, 0xff, 0x10, 0x0a];
        assert_eq!(decode(Format::Raw, &input).unwrap(), input.to_vec());
    }

    #[test]
    fn test_decode_hex_trims_trailing_newline() {
        let raw = decode(Format::Hex, b"00ff10\n").unwrap();
        assert_eq!(raw, vec![0x00, 0xff, 0x10]);
    }

    #[test]
    fn test_decode_hex_invalid() {
        assert!(matches!(
            decode(Format::Hex, b"zz"),
            Err(Error::InvalidFormat { format: Format::Hex, .. })
        ));
    }

    #[test]
    fn test_text_roundtrip_all_formats() {
        let raw = hex_literal::hex!("000b5b86296c6b1ef45afe895c71eaeb20880beca4");
        for format in [Format::Hex, Format::Base58, Format::Base58Check] {
            let text = encode_text(format, &raw).unwrap();
            let decoded = decode(format, text.as_bytes()).unwrap();
            assert_eq!(decoded, raw.to_vec(), "round trip failed for {format}");
        }
    }

    #[test]
    fn test_base58_keeps_leading_zero_bytes() {
        let raw = hex_literal::hex!("000b5b86296c6b1ef45afe895c71eaeb20880beca4");
        let text = encode_text(Format::Base58, &raw).unwrap();
        assert!(text.starts_with('1'));
        assert_eq!(decode(Format::Base58, text.as_bytes()).unwrap(), raw.to_vec());
    }

    #[test]
    fn test_encode_text_rejects_raw() {
        assert!(encode_text(Format::Raw, &[0x00]).is_err());
    }
}
