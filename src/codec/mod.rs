//! Codec Module
//!
//! Memcomparable encoding of primitive values: unsigned byte-wise comparison
//! of two encodings gives the same answer as comparing the values.
//!
//! ## Encoded Value Format
//! ```text
//! ┌──────────┬─────────────────────────────────────────────┐
//! │ Tag (1)  │             Body (kind specific)            │
//! └──────────┴─────────────────────────────────────────────┘
//! ```
//!
//! ### Bodies by Kind
//! - `!` Null:           empty
//! - `$` String:         bytes, each `00` written as `00 01`, then `00 00`
//! - `I` Int64:          8 bytes big-endian, sign bit flipped
//! - `D` Double:         8 bytes big-endian; positive: sign bit set,
//!                       negative: all bits inverted
//! - `[` ArrayIndex:     same as Int64
//! - `#` HybridTime:     8 bytes big-endian, raw
//! - `G` UInt16Hash:     2 bytes big-endian, raw
//! - `K` ColumnId:       order-preserving varint (1-5 bytes)
//! - `J` SystemColumnId: order-preserving varint (1-5 bytes)
//!
//! Every body is self-delimiting, so encodings can be concatenated into a
//! composite key and decoded back one value at a time.

mod decoder;
mod key_bytes;
mod numeric;
mod varint;

pub use decoder::{decode_key_sequence, decode_primitive_value};
pub use key_bytes::KeyBytes;
pub use varint::{decode_varint, encode_varint, encoded_len, MAX_VARINT_LEN};
