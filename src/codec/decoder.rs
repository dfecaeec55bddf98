//! Primitive value decoder
//!
//! Reverses [`KeyBytes`](super::KeyBytes) encodings one value at a time.

use bytes::Buf;

use crate::error::Result;
use crate::status::Status;
use crate::value::{ColumnId, ColumnIdRep, HybridTime, PrimitiveValue, ValueType};

use super::numeric::{key_to_double, key_to_int64};
use super::varint::decode_varint;

/// Decode one value from the front of `cursor`
///
/// On success the cursor is left on the first byte after the value. On
/// failure it is not moved and a Corruption status is returned.
pub fn decode_primitive_value(cursor: &mut &[u8]) -> Result<PrimitiveValue> {
    let mut cur: &[u8] = *cursor;
    match decode_tagged(&mut cur) {
        Ok(value) => {
            tracing::trace!(
                consumed = cursor.len() - cur.len(),
                value = %value,
                "decoded primitive value"
            );
            *cursor = cur;
            Ok(value)
        }
        Err(status) => {
            tracing::debug!(
                remaining = cursor.len(),
                error = %status,
                "failed to decode primitive value"
            );
            Err(status)
        }
    }
}

/// Decode a run of back-to-back values until `bytes` is exhausted
pub fn decode_key_sequence(bytes: &[u8]) -> Result<Vec<PrimitiveValue>> {
    let mut cursor = bytes;
    let mut values = Vec::new();
    while !cursor.is_empty() {
        let offset = bytes.len() - cursor.len();
        let value = decode_primitive_value(&mut cursor).map_err(|status| {
            status.clone_and_prepend(format!(
                "Component {} at offset {}",
                values.len(),
                offset
            ))
        })?;
        values.push(value);
    }
    Ok(values)
}

fn decode_tagged(cur: &mut &[u8]) -> Result<PrimitiveValue> {
    if !cur.has_remaining() {
        return Err(Status::corruption(
            "Cannot decode a primitive value from an empty slice",
        ));
    }

    let value_type = ValueType::try_from(cur.get_u8())?;
    let value = match value_type {
        ValueType::Null => PrimitiveValue::Null,
        ValueType::String => PrimitiveValue::String(decode_string(cur)?),
        ValueType::Int64 => {
            ensure_remaining(cur, 8, "Int64")?;
            PrimitiveValue::Int64(key_to_int64(cur.get_u64()))
        }
        ValueType::Double => {
            ensure_remaining(cur, 8, "Double")?;
            PrimitiveValue::Double(key_to_double(cur.get_u64()))
        }
        ValueType::ArrayIndex => {
            ensure_remaining(cur, 8, "ArrayIndex")?;
            PrimitiveValue::ArrayIndex(key_to_int64(cur.get_u64()))
        }
        ValueType::HybridTime => {
            ensure_remaining(cur, 8, "HybridTime")?;
            PrimitiveValue::HybridTime(HybridTime::new(cur.get_u64()))
        }
        ValueType::UInt16Hash => {
            ensure_remaining(cur, 2, "UInt16Hash")?;
            PrimitiveValue::UInt16Hash(cur.get_u16())
        }
        ValueType::ColumnId => PrimitiveValue::ColumnId(decode_column_id(cur)?),
        ValueType::SystemColumnId => PrimitiveValue::SystemColumnId(decode_column_id(cur)?),
    };
    Ok(value)
}

fn ensure_remaining(cur: &[u8], needed: usize, what: &str) -> Result<()> {
    if cur.len() < needed {
        return Err(Status::corruption(format!(
            "Not enough bytes to decode {}: expected {}, got {}",
            what,
            needed,
            cur.len()
        )));
    }
    Ok(())
}

/// Copy bytes up to the `00 00` terminator, turning `00 01` back into `00`
fn decode_string(cur: &mut &[u8]) -> Result<Vec<u8>> {
    let src: &[u8] = *cur;
    let mut out = Vec::new();
    let mut pos = 0;
    loop {
        let zero = match src[pos..].iter().position(|&b| b == 0) {
            Some(offset) => pos + offset,
            None => {
                return Err(Status::corruption(
                    "Unterminated string: no terminator before end of input",
                ))
            }
        };
        out.extend_from_slice(&src[pos..zero]);
        match src.get(zero + 1) {
            Some(0x00) => {
                cur.advance(zero + 2);
                return Ok(out);
            }
            Some(0x01) => {
                out.push(0x00);
                pos = zero + 2;
            }
            Some(&other) => {
                return Err(Status::corruption(format!(
                    "Invalid escape sequence in string: 0x00 0x{:02x}",
                    other
                )))
            }
            None => {
                return Err(Status::corruption(
                    "Unterminated string: input ends inside an escape sequence",
                ))
            }
        }
    }
}

fn decode_column_id(cur: &mut &[u8]) -> Result<ColumnId> {
    let (raw, len) = decode_varint(cur)
        .map_err(|status| status.clone_and_prepend("Cannot decode column id"))?;
    let rep = ColumnIdRep::try_from(raw).map_err(|_| {
        Status::corruption(format!("Column id out of range: {}", raw))
    })?;
    cur.advance(len);
    Ok(ColumnId::new(rep))
}
