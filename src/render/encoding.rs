use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Bytes sampled from the head of a file for encoding detection (8KB)
const PROBE_BYTES: usize = 8192;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf8Bom,
    Utf16Le,
    Utf16Be,
}

/// Error type for text decoding
#[derive(Debug)]
pub enum DecodeError {
    Io(io::Error),
    Binary(u64),
    Undetectable,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Io(e) => write!(f, "{}", e),
            DecodeError::Binary(size) => write!(f, "binary content ({} bytes)", size),
            DecodeError::Undetectable => write!(f, "text encoding could not be detected"),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<io::Error> for DecodeError {
    fn from(e: io::Error) -> Self {
        DecodeError::Io(e)
    }
}

/// Guess the text encoding from a leading byte sample.
///
/// A byte-order mark wins outright. Otherwise the sample must look like text
/// (no null bytes, under 10% control characters) and validate as UTF-8.
pub fn detect_encoding(sample: &[u8]) -> Option<TextEncoding> {
    if sample.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return Some(TextEncoding::Utf8Bom);
    }
    if sample.starts_with(&[0xFF, 0xFE]) {
        return Some(TextEncoding::Utf16Le);
    }
    if sample.starts_with(&[0xFE, 0xFF]) {
        return Some(TextEncoding::Utf16Be);
    }

    let control_chars = sample
        .iter()
        .filter(|&&b| b < 32 && b != 9 && b != 10 && b != 13)
        .count();
    if sample.contains(&0) || control_chars > sample.len() / 10 {
        return None;
    }

    match std::str::from_utf8(sample) {
        Ok(_) => Some(TextEncoding::Utf8),
        // The sample may cut a multi-byte character at its end; only an
        // invalid sequence before the tail rules out UTF-8.
        Err(e) if e.valid_up_to() + 4 > sample.len() => Some(TextEncoding::Utf8),
        Err(_) => None,
    }
}

/// Read a whole file as text, detecting the encoding from a leading sample.
///
/// Binary-looking content comes back as [`DecodeError::Binary`]; content whose
/// encoding cannot be established as [`DecodeError::Undetectable`].
pub fn read_to_text(path: &Path) -> Result<String, DecodeError> {
    let mut file = File::open(path)?;
    let mut raw = Vec::new();
    file.read_to_end(&mut raw)?;

    let sample = &raw[..raw.len().min(PROBE_BYTES)];
    let encoding = match detect_encoding(sample) {
        Some(encoding) => encoding,
        None if sample.contains(&0) => return Err(DecodeError::Binary(raw.len() as u64)),
        None => return Err(DecodeError::Undetectable),
    };

    decode(&raw, encoding)
}

fn decode(raw: &[u8], encoding: TextEncoding) -> Result<String, DecodeError> {
    match encoding {
        TextEncoding::Utf8 => {
            String::from_utf8(raw.to_vec()).map_err(|_| DecodeError::Undetectable)
        }
        TextEncoding::Utf8Bom => {
            String::from_utf8(raw[3..].to_vec()).map_err(|_| DecodeError::Undetectable)
        }
        TextEncoding::Utf16Le | TextEncoding::Utf16Be => {
            let body = &raw[2..];
            if body.len() % 2 != 0 {
                return Err(DecodeError::Undetectable);
            }
            let units: Vec<u16> = body
                .chunks_exact(2)
                .map(|pair| match encoding {
                    TextEncoding::Utf16Le => u16::from_le_bytes([pair[0], pair[1]]),
                    _ => u16::from_be_bytes([pair[0], pair[1]]),
                })
                .collect();
            String::from_utf16(&units).map_err(|_| DecodeError::Undetectable)
        }
    }
}
