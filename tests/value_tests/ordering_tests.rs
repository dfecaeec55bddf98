//! Ordering Tests
//!
//! Byte-wise order of encodings must match value order. Randomized trials
//! use a fixed seed that is printed with every failure.

use std::cmp::Ordering;

use docdb_keys::{ColumnId, ColumnIdRep, HybridTime, KeyBytes, PrimitiveValue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 0x5eed_d0cd_b000_0001;
const TRIALS: usize = 1000;

fn key_of(value: &PrimitiveValue) -> Vec<u8> {
    value.to_key_bytes().as_slice().to_vec()
}

// =============================================================================
// Embedded Zero Tests
// =============================================================================

#[test]
fn test_compare_strings_with_embedded_zeros() {
    let zero_char = PrimitiveValue::from(&b"\x00"[..]);
    let two_zero_chars = PrimitiveValue::from(&b"\x00\x00"[..]);

    assert_eq!(zero_char, zero_char);
    assert_eq!(two_zero_chars, two_zero_chars);

    assert!(zero_char < two_zero_chars);
    assert!(two_zero_chars > zero_char);
    assert_ne!(zero_char, two_zero_chars);
    assert_ne!(two_zero_chars, zero_char);

    assert!(!(zero_char < zero_char));
    assert!(!(zero_char > zero_char));
    assert!(!(two_zero_chars < two_zero_chars));
    assert!(!(two_zero_chars > two_zero_chars));
    assert!(!(two_zero_chars < zero_char));
    assert!(!(zero_char > two_zero_chars));
}

#[test]
fn test_prefix_sorts_first() {
    let cases: [(&[u8], &[u8]); 5] = [
        (b"", b"\x00"),
        (b"a", b"a\x00"),
        (b"a", b"ab"),
        (b"a\x00", b"a\x01"),
        (b"a\x00\xff", b"a\x01"),
    ];
    for (lo, hi) in cases {
        let lo_value = PrimitiveValue::from(lo);
        let hi_value = PrimitiveValue::from(hi);
        assert!(lo_value < hi_value, "{} should sort before {}", lo_value, hi_value);
        assert!(key_of(&lo_value) < key_of(&hi_value));
    }
}

// =============================================================================
// Randomized Comparison Tests
// =============================================================================

#[test]
fn test_random_comparable_column_id() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..TRIALS {
        let column_id1: ColumnIdRep = rng.gen_range(0..ColumnIdRep::MAX);
        let column_id2: ColumnIdRep = rng.gen_range(0..ColumnIdRep::MAX);

        let mut key_bytes1 = KeyBytes::new();
        let mut key_bytes2 = KeyBytes::new();
        key_bytes1.append_column_id(ColumnId::new(column_id1));
        key_bytes2.append_column_id(ColumnId::new(column_id2));

        assert_eq!(
            key_bytes1.as_slice().cmp(key_bytes2.as_slice()),
            column_id1.cmp(&column_id2),
            "Failed for values {}, {} (seed {:#x})",
            column_id1,
            column_id2,
            SEED
        );
    }
}

#[test]
fn test_random_comparable_small_column_ids() {
    // Concentrate on the length boundaries of the varint
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..TRIALS {
        let bits1 = rng.gen_range(0..31);
        let bits2 = rng.gen_range(0..31);
        let column_id1: ColumnIdRep = rng.gen_range(0..(1 << bits1) + 1);
        let column_id2: ColumnIdRep = rng.gen_range(0..(1 << bits2) + 1);

        let v1 = PrimitiveValue::column_id(ColumnId::new(column_id1));
        let v2 = PrimitiveValue::column_id(ColumnId::new(column_id2));
        assert_eq!(
            v1.cmp(&v2),
            column_id1.cmp(&column_id2),
            "Failed for values {}, {} (seed {:#x})",
            column_id1,
            column_id2,
            SEED
        );
    }
}

#[test]
fn test_random_comparable_int64() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..TRIALS {
        let a: i64 = rng.gen();
        let b: i64 = rng.gen();
        assert_eq!(
            key_of(&PrimitiveValue::int64(a)).cmp(&key_of(&PrimitiveValue::int64(b))),
            a.cmp(&b),
            "Failed for values {}, {} (seed {:#x})",
            a,
            b,
            SEED
        );
        assert_eq!(
            PrimitiveValue::array_index(a).cmp(&PrimitiveValue::array_index(b)),
            a.cmp(&b)
        );
    }
}

#[test]
fn test_random_comparable_double() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..TRIALS {
        let a = f64::from_bits(rng.gen());
        let b = f64::from_bits(rng.gen());
        if a.is_nan() || b.is_nan() {
            continue;
        }
        let expected = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        // -0.0 and 0.0 are numerically equal but encode apart
        if expected == Ordering::Equal && a.to_bits() != b.to_bits() {
            continue;
        }
        assert_eq!(
            PrimitiveValue::double(a).cmp(&PrimitiveValue::double(b)),
            expected,
            "Failed for values {:e}, {:e} (seed {:#x})",
            a,
            b,
            SEED
        );
    }
}

#[test]
fn test_random_comparable_strings() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..TRIALS {
        // Small alphabet with zeros so prefixes and escapes collide often
        let len1 = rng.gen_range(0..6);
        let len2 = rng.gen_range(0..6);
        let s1: Vec<u8> = (0..len1).map(|_| rng.gen_range(0..3u8)).collect();
        let s2: Vec<u8> = (0..len2).map(|_| rng.gen_range(0..3u8)).collect();
        assert_eq!(
            PrimitiveValue::from(s1.clone()).cmp(&PrimitiveValue::from(s2.clone())),
            s1.cmp(&s2),
            "Failed for values {:?}, {:?} (seed {:#x})",
            s1,
            s2,
            SEED
        );
    }
}

#[test]
fn test_hybrid_time_and_hash_order() {
    let times = [0u64, 1, 1 << 32, u64::MAX - 1, u64::MAX];
    for w in times.windows(2) {
        assert!(
            PrimitiveValue::hybrid_time(HybridTime::new(w[0]))
                < PrimitiveValue::hybrid_time(HybridTime::new(w[1]))
        );
    }
    let hashes = [0i64, 1, 255, 256, 65535];
    for w in hashes.windows(2) {
        assert!(PrimitiveValue::uint16_hash(w[0]) < PrimitiveValue::uint16_hash(w[1]));
    }
}
