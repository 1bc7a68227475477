//! Codepoint sequence decoding
//!
//! The dataset stores each emoji as hyphen-joined hex codepoints
//! (`"1F600"`, `"1F1E6-1F1E8"`, `"0023-FE0F-20E3"`).

use thiserror::Error;

/// A `unified` field that does not describe a sequence of Unicode scalar values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodepointError {
    #[error("empty codepoint in sequence")]
    Empty,
    #[error("'{0}' is not a hexadecimal codepoint")]
    NotHex(String),
    #[error("U+{0:X} is not a Unicode scalar value")]
    NotScalar(u32),
}

/// Decode a hyphen-joined codepoint sequence into a displayable string
///
/// Sequences concatenate in order, so regional indicator pairs become flags and
/// ZWJ sequences stay intact. Supplementary-plane scalars are stored as Rust
/// `char`s; hosts with UTF-16 strings get the surrogate pair from `encode_utf16`.
pub fn codepoint_to_glyph(unified: &str) -> Result<String, CodepointError> {
    let mut glyph = String::with_capacity(unified.len());
    for piece in unified.split('-') {
        glyph.push(parse_codepoint(piece)?);
    }
    Ok(glyph)
}

fn parse_codepoint(piece: &str) -> Result<char, CodepointError> {
    if piece.is_empty() {
        return Err(CodepointError::Empty);
    }
    // from_str_radix alone would also accept a leading '+'
    if !piece.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodepointError::NotHex(piece.to_string()));
    }
    let value =
        u32::from_str_radix(piece, 16).map_err(|_| CodepointError::NotHex(piece.to_string()))?;
    char::from_u32(value).ok_or(CodepointError::NotScalar(value))
}
