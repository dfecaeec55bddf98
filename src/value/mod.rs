//! Value Module
//!
//! Scalar key components and their identifier types.
//!
//! ## Kinds
//! | Kind             | Payload      | Display                 |
//! | ---------------- | ------------ | ----------------------- |
//! | `Null`           | -            | `null`                  |
//! | `String`         | bytes        | `"foo\x00"`             |
//! | `Int64`          | `i64`        | `-42`                   |
//! | `Double`         | `f64`        | `3.1415`, `1.000000E-100` |
//! | `ArrayIndex`     | `i64`        | `ArrayIndex(3)`         |
//! | `HybridTime`     | `u64`        | `HT(17)`, `HT(Max)`     |
//! | `UInt16Hash`     | `u16`        | `UInt16Hash(65535)`     |
//! | `ColumnId`       | `i32` (>= 0) | `ColumnId(5)`           |
//! | `SystemColumnId` | `i32` (>= 0) | `SystemColumnId(5)`     |

mod ids;
mod primitive;
mod value_type;

pub use ids::{ColumnId, ColumnIdRep, HybridTime};
pub use primitive::PrimitiveValue;
pub use value_type::ValueType;
