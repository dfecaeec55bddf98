//! Primitive value
//!
//! The tagged union over every scalar a key component can hold.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::codec::{decode_primitive_value, KeyBytes};
use crate::error::Result;
use crate::format::format_bytes_as_str;

use super::{ColumnId, HybridTime, ValueType};

/// A single scalar key component
///
/// Equality, ordering and hashing all go through the encoded form, so a
/// `PrimitiveValue` behaves exactly like its key bytes inside ordered or
/// hashed containers.
#[derive(Debug, Clone, Default)]
pub enum PrimitiveValue {
    #[default]
    Null,
    /// Arbitrary bytes; embedded zeros are allowed
    String(Vec<u8>),
    Int64(i64),
    Double(f64),
    ArrayIndex(i64),
    HybridTime(HybridTime),
    UInt16Hash(u16),
    ColumnId(ColumnId),
    SystemColumnId(ColumnId),
}

impl PrimitiveValue {
    // =========================================================================
    // Construction
    // =========================================================================

    pub fn null() -> Self {
        PrimitiveValue::Null
    }

    pub fn string(bytes: impl Into<Vec<u8>>) -> Self {
        PrimitiveValue::String(bytes.into())
    }

    pub fn int64(v: i64) -> Self {
        PrimitiveValue::Int64(v)
    }

    pub fn double(v: f64) -> Self {
        PrimitiveValue::Double(v)
    }

    pub fn array_index(index: i64) -> Self {
        PrimitiveValue::ArrayIndex(index)
    }

    pub fn hybrid_time(ht: HybridTime) -> Self {
        PrimitiveValue::HybridTime(ht)
    }

    /// Hash bucket; wider inputs are truncated to their low 16 bits
    pub fn uint16_hash(hash: i64) -> Self {
        PrimitiveValue::UInt16Hash(hash as u16)
    }

    pub fn column_id(id: ColumnId) -> Self {
        PrimitiveValue::ColumnId(id)
    }

    pub fn system_column_id(id: ColumnId) -> Self {
        PrimitiveValue::SystemColumnId(id)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn value_type(&self) -> ValueType {
        match self {
            PrimitiveValue::Null => ValueType::Null,
            PrimitiveValue::String(_) => ValueType::String,
            PrimitiveValue::Int64(_) => ValueType::Int64,
            PrimitiveValue::Double(_) => ValueType::Double,
            PrimitiveValue::ArrayIndex(_) => ValueType::ArrayIndex,
            PrimitiveValue::HybridTime(_) => ValueType::HybridTime,
            PrimitiveValue::UInt16Hash(_) => ValueType::UInt16Hash,
            PrimitiveValue::ColumnId(_) => ValueType::ColumnId,
            PrimitiveValue::SystemColumnId(_) => ValueType::SystemColumnId,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PrimitiveValue::Null)
    }

    pub fn as_str_bytes(&self) -> Option<&[u8]> {
        match self {
            PrimitiveValue::String(s) => Some(s.as_slice()),
            _ => None,
        }
    }

    pub fn as_int64(&self) -> Option<i64> {
        match self {
            PrimitiveValue::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            PrimitiveValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_array_index(&self) -> Option<i64> {
        match self {
            PrimitiveValue::ArrayIndex(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_hybrid_time(&self) -> Option<HybridTime> {
        match self {
            PrimitiveValue::HybridTime(ht) => Some(*ht),
            _ => None,
        }
    }

    pub fn as_uint16_hash(&self) -> Option<u16> {
        match self {
            PrimitiveValue::UInt16Hash(h) => Some(*h),
            _ => None,
        }
    }

    /// Column id of either a user or a system column
    pub fn as_column_id(&self) -> Option<ColumnId> {
        match self {
            PrimitiveValue::ColumnId(id) | PrimitiveValue::SystemColumnId(id) => Some(*id),
            _ => None,
        }
    }

    // =========================================================================
    // Encoding / Decoding
    // =========================================================================

    /// Append the tag and encoded body of this value to `key`
    pub fn append_to_key(&self, key: &mut KeyBytes) {
        key.append_value_type(self.value_type());
        match self {
            PrimitiveValue::Null => {}
            PrimitiveValue::String(s) => key.append_string(s),
            PrimitiveValue::Int64(v) => key.append_int64(*v),
            PrimitiveValue::Double(v) => key.append_double(*v),
            PrimitiveValue::ArrayIndex(v) => key.append_array_index(*v),
            PrimitiveValue::HybridTime(ht) => key.append_hybrid_time(*ht),
            PrimitiveValue::UInt16Hash(h) => key.append_uint16_hash(*h),
            PrimitiveValue::ColumnId(id) | PrimitiveValue::SystemColumnId(id) => {
                key.append_column_id(*id)
            }
        }
    }

    pub fn to_key_bytes(&self) -> KeyBytes {
        let mut key = KeyBytes::new();
        self.append_to_key(&mut key);
        key
    }

    /// Decode one value from the front of `cursor`, advancing it on success
    pub fn decode_from_key(cursor: &mut &[u8]) -> Result<Self> {
        decode_primitive_value(cursor)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<&str> for PrimitiveValue {
    fn from(s: &str) -> Self {
        PrimitiveValue::String(s.as_bytes().to_vec())
    }
}

impl From<String> for PrimitiveValue {
    fn from(s: String) -> Self {
        PrimitiveValue::String(s.into_bytes())
    }
}

impl From<&[u8]> for PrimitiveValue {
    fn from(s: &[u8]) -> Self {
        PrimitiveValue::String(s.to_vec())
    }
}

impl From<Vec<u8>> for PrimitiveValue {
    fn from(s: Vec<u8>) -> Self {
        PrimitiveValue::String(s)
    }
}

impl From<i64> for PrimitiveValue {
    fn from(v: i64) -> Self {
        PrimitiveValue::Int64(v)
    }
}

impl From<HybridTime> for PrimitiveValue {
    fn from(ht: HybridTime) -> Self {
        PrimitiveValue::HybridTime(ht)
    }
}

impl From<ColumnId> for PrimitiveValue {
    fn from(id: ColumnId) -> Self {
        PrimitiveValue::ColumnId(id)
    }
}

// =============================================================================
// Comparison
// =============================================================================

impl PartialEq for PrimitiveValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PrimitiveValue {}

impl PartialOrd for PrimitiveValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PrimitiveValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_key_bytes().as_slice().cmp(other.to_key_bytes().as_slice())
    }
}

impl Hash for PrimitiveValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_key_bytes().as_slice().hash(state);
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveValue::Null => f.write_str("null"),
            PrimitiveValue::String(s) => f.write_str(&format_bytes_as_str(s)),
            PrimitiveValue::Int64(v) => write!(f, "{}", v),
            PrimitiveValue::Double(v) => f.write_str(&format_double(*v)),
            PrimitiveValue::ArrayIndex(v) => write!(f, "ArrayIndex({})", v),
            PrimitiveValue::HybridTime(ht) => write!(f, "{}", ht),
            PrimitiveValue::UInt16Hash(h) => write!(f, "UInt16Hash({})", h),
            PrimitiveValue::ColumnId(id) => write!(f, "ColumnId({})", id),
            PrimitiveValue::SystemColumnId(id) => write!(f, "SystemColumnId({})", id),
        }
    }
}

/// Shortest round-trip form, or `%.6E` style when that form needs an exponent
fn format_double(v: f64) -> String {
    let shortest = format!("{:?}", v);
    if shortest.contains('e') {
        format!("{:.6E}", v)
    } else {
        shortest
    }
}
