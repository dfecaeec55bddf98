//! Order-preserving variable-length integers
//!
//! Used for column ids. The count of leading one bits in the first byte
//! gives the number of bytes that follow it:
//!
//! ```text
//! 0xxxxxxx                                  7 bits   [0, 2^7)
//! 10xxxxxx xxxxxxxx                        14 bits   [2^7, 2^14)
//! 110xxxxx xxxxxxxx xxxxxxxx               21 bits   [2^14, 2^21)
//! 1110xxxx xxxxxxxx xxxxxxxx xxxxxxxx      28 bits   [2^21, 2^28)
//! 11110xxx xxxxxxxx ... (4 bytes)          35 bits   [2^28, 2^32)
//! ```
//!
//! Only the shortest form is valid. Longer forms carry a strictly larger
//! prefix, so byte order matches numeric order across lengths.

use bytes::BufMut;

use crate::error::Result;
use crate::status::Status;

/// Longest encoding of a `u32`
pub const MAX_VARINT_LEN: usize = 5;

/// First-byte prefix for each encoded length (index = length - 1)
const LENGTH_PREFIX: [u8; MAX_VARINT_LEN] = [0x00, 0x80, 0xc0, 0xe0, 0xf0];

/// Number of bytes `value` occupies when encoded
pub fn encoded_len(value: u32) -> usize {
    match value {
        0..=0x7f => 1,
        0x80..=0x3fff => 2,
        0x4000..=0x1f_ffff => 3,
        0x20_0000..=0x0fff_ffff => 4,
        _ => 5,
    }
}

pub fn encode_varint<B: BufMut>(value: u32, dst: &mut B) {
    let len = encoded_len(value);
    let framed = (u64::from(LENGTH_PREFIX[len - 1]) << (8 * (len - 1))) | u64::from(value);
    dst.put_slice(&framed.to_be_bytes()[8 - len..]);
}

/// Decode a varint from the front of `src`
///
/// Returns the value and the number of bytes it occupied. `src` is not
/// modified.
pub fn decode_varint(src: &[u8]) -> Result<(u32, usize)> {
    let first = *src
        .first()
        .ok_or_else(|| Status::corruption("Cannot decode varint from an empty slice"))?;

    let len = first.leading_ones() as usize + 1;
    if len > MAX_VARINT_LEN {
        return Err(Status::corruption(format!(
            "Invalid varint prefix byte: 0x{:02x}",
            first
        )));
    }
    if src.len() < len {
        return Err(Status::corruption(format!(
            "Truncated varint: expected {} bytes, got {}",
            len,
            src.len()
        )));
    }

    let mut value = u64::from(first & (0xff >> len));
    for &b in &src[1..len] {
        value = (value << 8) | u64::from(b);
    }

    let value = u32::try_from(value).map_err(|_| {
        Status::corruption(format!("Varint value out of range: {}", value))
    })?;
    if encoded_len(value) != len {
        return Err(Status::corruption(format!(
            "Non-canonical varint: {} encoded in {} bytes",
            value, len
        )));
    }

    Ok((value, len))
}
