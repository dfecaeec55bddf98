//! Value type tags
//!
//! The leading byte of every encoded primitive value.

use crate::error::Result;
use crate::status::Status;

/// Tag byte identifying the kind of an encoded value
///
/// Tags are printable ASCII so escaped key dumps stay readable. Their
/// numeric order is the order between kinds sharing a key position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ValueType {
    Null = b'!',
    HybridTime = b'#',
    String = b'$',
    Double = b'D',
    UInt16Hash = b'G',
    Int64 = b'I',
    SystemColumnId = b'J',
    ColumnId = b'K',
    ArrayIndex = b'[',
}

impl ValueType {
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ValueType {
    type Error = Status;

    fn try_from(byte: u8) -> Result<Self> {
        match byte {
            b'!' => Ok(ValueType::Null),
            b'#' => Ok(ValueType::HybridTime),
            b'$' => Ok(ValueType::String),
            b'D' => Ok(ValueType::Double),
            b'G' => Ok(ValueType::UInt16Hash),
            b'I' => Ok(ValueType::Int64),
            b'J' => Ok(ValueType::SystemColumnId),
            b'K' => Ok(ValueType::ColumnId),
            b'[' => Ok(ValueType::ArrayIndex),
            _ => Err(Status::corruption(format!(
                "Invalid value type: 0x{:02x}",
                byte
            ))),
        }
    }
}
