//! Input acquisition from a command-line string or a file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Error;
use crate::Result;

/// Fixed input buffer capacity in bytes.
///
/// Generous for every expected representation in every format; anything
/// larger is rejected outright rather than silently truncated.
pub const INPUT_CAPACITY: usize = 256;

/// Fetch the input bytes from `--input` or `--input-file`.
pub fn acquire(input: Option<&str>, input_file: Option<&Path>) -> Result<Vec<u8>> {
    let data = match (input, input_file) {
        (Some(text), _) => text.as_bytes().to_vec(),
        (None, Some(path)) => {
            let mut data = Vec::with_capacity(INPUT_CAPACITY);
            // One extra byte so an oversized file is detected, not clipped.
            File::open(path)?
                .take(INPUT_CAPACITY as u64 + 1)
                .read_to_end(&mut data)?;
            data
        }
        (None, None) => return Err(Error::Unspecified("--input or --input-file")),
    };

    if data.is_empty() {
        return Err(Error::Unspecified("input data"));
    }
    if data.len() > INPUT_CAPACITY {
        return Err(Error::InputTooLarge {
            capacity: INPUT_CAPACITY,
            actual: data.len(),
        });
    }

    Ok(data)
}
