//! Key bytes
//!
//! Growable buffer that encoded primitive values are appended to.

use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};

use crate::format::format_bytes_as_str;
use crate::value::{ColumnId, HybridTime, ValueType};

use super::numeric::{double_to_key, int64_to_key};
use super::varint::encode_varint;

/// Escape for a literal zero byte inside an encoded string
const ESCAPED_ZERO: [u8; 2] = [0x00, 0x01];

/// Terminator written after every encoded string
const STRING_TERMINATOR: [u8; 2] = [0x00, 0x00];

/// Owned buffer holding one or more encoded values end-to-end
///
/// The `append_*` methods write bodies only; callers that want a complete
/// self-describing value append the tag first (see
/// [`PrimitiveValue::append_to_key`](crate::PrimitiveValue::append_to_key)).
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyBytes {
    data: BytesMut,
}

impl KeyBytes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: BytesMut::with_capacity(capacity),
        }
    }

    // =========================================================================
    // Appending
    // =========================================================================

    pub fn append_value_type(&mut self, value_type: ValueType) {
        self.data.put_u8(value_type.as_byte());
    }

    pub fn append_raw(&mut self, bytes: &[u8]) {
        self.data.put_slice(bytes);
    }

    /// String body: zeros escaped as `00 01`, then the `00 00` terminator
    pub fn append_string(&mut self, s: &[u8]) {
        self.data.reserve(s.len() + STRING_TERMINATOR.len());
        let mut rest = s;
        while let Some(pos) = rest.iter().position(|&b| b == 0) {
            self.data.put_slice(&rest[..pos]);
            self.data.put_slice(&ESCAPED_ZERO);
            rest = &rest[pos + 1..];
        }
        self.data.put_slice(rest);
        self.data.put_slice(&STRING_TERMINATOR);
    }

    /// 8 bytes big-endian with the sign bit flipped
    pub fn append_int64(&mut self, v: i64) {
        self.data.put_u64(int64_to_key(v));
    }

    /// 8 bytes big-endian, no transform
    pub fn append_uint64(&mut self, v: u64) {
        self.data.put_u64(v);
    }

    pub fn append_double(&mut self, v: f64) {
        self.data.put_u64(double_to_key(v));
    }

    pub fn append_array_index(&mut self, index: i64) {
        self.append_int64(index);
    }

    pub fn append_hybrid_time(&mut self, ht: HybridTime) {
        self.append_uint64(ht.value());
    }

    pub fn append_uint16_hash(&mut self, hash: u16) {
        self.data.put_u16(hash);
    }

    /// Order-preserving varint, 1 to 5 bytes
    pub fn append_column_id(&mut self, id: ColumnId) {
        encode_varint(id.rep() as u32, &mut self.data);
    }

    // =========================================================================
    // Buffer management
    // =========================================================================

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }

    /// Convert into an immutable, cheaply cloneable buffer
    pub fn freeze(self) -> Bytes {
        self.data.freeze()
    }
}

impl AsRef<[u8]> for KeyBytes {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl From<&[u8]> for KeyBytes {
    fn from(bytes: &[u8]) -> Self {
        Self {
            data: BytesMut::from(bytes),
        }
    }
}

impl fmt::Display for KeyBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_bytes_as_str(&self.data))
    }
}

impl fmt::Debug for KeyBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyBytes({})", self)
    }
}
