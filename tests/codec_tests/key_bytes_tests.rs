//! KeyBytes Tests
//!
//! Tests for the exact byte layout produced by the encoder.

use docdb_keys::{ColumnId, HybridTime, KeyBytes, PrimitiveValue, ValueType};

fn encoded(value: PrimitiveValue) -> Vec<u8> {
    value.to_key_bytes().as_slice().to_vec()
}

// =============================================================================
// Escaped Rendering Tests
// =============================================================================

#[test]
fn test_encoding_string() {
    assert_eq!(
        PrimitiveValue::from("foo").to_key_bytes().to_string(),
        r#""$foo\x00\x00""#
    );
}

#[test]
fn test_encoding_string_with_embedded_zero() {
    assert_eq!(
        PrimitiveValue::from(&b"foo\x00bar\x01"[..]).to_key_bytes().to_string(),
        r#""$foo\x00\x01bar\x01\x00\x00""#
    );
}

#[test]
fn test_encoding_int64() {
    assert_eq!(
        PrimitiveValue::from(123i64).to_key_bytes().to_string(),
        r#""I\x80\x00\x00\x00\x00\x00\x00{""#
    );
    assert_eq!(
        PrimitiveValue::from(i64::MIN).to_key_bytes().to_string(),
        r#""I\x00\x00\x00\x00\x00\x00\x00\x00""#
    );
    assert_eq!(
        PrimitiveValue::from(i64::MAX).to_key_bytes().to_string(),
        r#""I\xff\xff\xff\xff\xff\xff\xff\xff""#
    );
}

// =============================================================================
// Raw Layout Tests
// =============================================================================

#[test]
fn test_null_is_tag_only() {
    assert_eq!(encoded(PrimitiveValue::null()), vec![b'!']);
}

#[test]
fn test_empty_string() {
    assert_eq!(encoded(PrimitiveValue::from("")), vec![b'$', 0x00, 0x00]);
}

#[test]
fn test_double_layout() {
    let one = 1.0f64.to_bits() ^ 0x8000_0000_0000_0000;
    let mut expected = vec![b'D'];
    expected.extend_from_slice(&one.to_be_bytes());
    assert_eq!(encoded(PrimitiveValue::double(1.0)), expected);

    let neg = !(-1.0f64).to_bits();
    let mut expected = vec![b'D'];
    expected.extend_from_slice(&neg.to_be_bytes());
    assert_eq!(encoded(PrimitiveValue::double(-1.0)), expected);
}

#[test]
fn test_hybrid_time_is_raw_big_endian() {
    assert_eq!(
        encoded(PrimitiveValue::hybrid_time(HybridTime::new(0x0102))),
        vec![b'#', 0, 0, 0, 0, 0, 0, 0x01, 0x02]
    );
    assert_eq!(
        encoded(PrimitiveValue::hybrid_time(HybridTime::MAX)),
        vec![b'#', 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
    );
}

#[test]
fn test_uint16_hash_is_two_bytes() {
    assert_eq!(
        encoded(PrimitiveValue::uint16_hash(0xabcd)),
        vec![b'G', 0xab, 0xcd]
    );
    assert_eq!(encoded(PrimitiveValue::uint16_hash(-1)), vec![b'G', 0xff, 0xff]);
}

#[test]
fn test_array_index_uses_sign_flip() {
    assert_eq!(
        encoded(PrimitiveValue::array_index(-1)),
        vec![b'[', 0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
    );
}

#[test]
fn test_column_id_tags() {
    assert_eq!(encoded(PrimitiveValue::column_id(ColumnId::new(5))), vec![b'K', 5]);
    assert_eq!(
        encoded(PrimitiveValue::system_column_id(ColumnId::new(5))),
        vec![b'J', 5]
    );
}

// =============================================================================
// Varint Storage Tests
// =============================================================================

#[test]
fn test_varint_storage() {
    let mut key_bytes = KeyBytes::new();
    key_bytes.append_column_id(ColumnId::new(127));
    assert_eq!(key_bytes.as_slice().len(), 1);

    // 2 more bytes once past 127
    key_bytes.append_column_id(ColumnId::new(128));
    assert_eq!(key_bytes.as_slice().len(), 3);

    key_bytes.clear();
    key_bytes.append_column_id(ColumnId::new(i32::MAX));
    assert_eq!(key_bytes.as_slice().len(), 5);
}

// =============================================================================
// Buffer Tests
// =============================================================================

#[test]
fn test_concatenation() {
    let mut key = KeyBytes::new();
    PrimitiveValue::from("a").append_to_key(&mut key);
    PrimitiveValue::int64(0).append_to_key(&mut key);
    assert_eq!(key.len(), 4 + 9);
    assert_eq!(key.as_slice()[0], ValueType::String.as_byte());
    assert_eq!(key.as_slice()[4], ValueType::Int64.as_byte());
}

#[test]
fn test_freeze_keeps_contents() {
    let key = PrimitiveValue::from("xyz").to_key_bytes();
    let expected = key.as_slice().to_vec();
    let frozen = key.freeze();
    assert_eq!(&frozen[..], &expected[..]);
}

#[test]
fn test_key_bytes_order_is_byte_order() {
    let a = PrimitiveValue::from("a").to_key_bytes();
    let b = PrimitiveValue::from("b").to_key_bytes();
    assert!(a < b);
    assert_eq!(a, KeyBytes::from(a.as_slice()));
}
