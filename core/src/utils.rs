use base64::{engine::general_purpose::STANDARD, Engine};

/// Standard padded base64 of a byte range.
#[inline]
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Upper-case hex with `-` separators, e.g. `00-61-FF`.
pub fn to_hex_dashed(bytes: &[u8]) -> String {
    let hex = hex::encode_upper(bytes);
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, pair) in hex.as_bytes().chunks_exact(2).enumerate() {
        if i > 0 {
            out.push('-');
        }
        out.push(char::from(pair[0]));
        out.push(char::from(pair[1]));
    }
    out
}

/// Hex preview of at most `max` bytes, with a trailing `..` when truncated.
pub fn hex_preview(bytes: &[u8], max: usize) -> String {
    if bytes.len() <= max {
        hex::encode(bytes)
    } else {
        format!("{}..", hex::encode(&bytes[..max]))
    }
}
