//! Order-preserving numeric transforms
//!
//! Map signed and floating-point values onto `u64` so that big-endian bytes
//! of the result compare like the original values.

const SIGN_BIT: u64 = 0x8000_0000_0000_0000;

#[inline]
pub(crate) fn int64_to_key(v: i64) -> u64 {
    (v as u64) ^ SIGN_BIT
}

#[inline]
pub(crate) fn key_to_int64(k: u64) -> i64 {
    (k ^ SIGN_BIT) as i64
}

/// Positive doubles get the sign bit set; negative ones are fully inverted
#[inline]
pub(crate) fn double_to_key(v: f64) -> u64 {
    let bits = v.to_bits();
    if bits & SIGN_BIT != 0 {
        !bits
    } else {
        bits ^ SIGN_BIT
    }
}

#[inline]
pub(crate) fn key_to_double(k: u64) -> f64 {
    let bits = if k & SIGN_BIT != 0 { k ^ SIGN_BIT } else { !k };
    f64::from_bits(bits)
}
