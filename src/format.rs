//! Byte formatting helpers
//!
//! Display-only rendering of raw bytes. Never part of the encoded form.

/// Render bytes as a double-quoted string
///
/// Printable ASCII is kept as is, `"` and `\` are backslash-escaped and
/// everything else becomes `\xHH` (lowercase hex).
pub fn format_bytes_as_str(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    append_escaped(&mut out, bytes);
    out.push('"');
    out
}

/// Append the escaped body of `bytes` (no surrounding quotes) to `out`
pub fn append_escaped(out: &mut String, bytes: &[u8]) {
    for &b in bytes {
        match b {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7e => out.push(b as char),
            _ => {
                out.push_str("\\x");
                out.push(hex_digit(b >> 4));
                out.push(hex_digit(b & 0x0f));
            }
        }
    }
}

fn hex_digit(nibble: u8) -> char {
    char::from_digit(u32::from(nibble), 16).unwrap_or('?')
}
