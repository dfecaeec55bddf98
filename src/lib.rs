//! # docdb-keys
//!
//! Primitive-value codec for a document/SQL layer built on an ordered
//! key-value store:
//! - One tagged type for every scalar a key component can hold
//! - Memcomparable encoding (byte order == value order)
//! - Self-delimiting encodings that concatenate into composite keys
//! - Compact, shareable `Status` for reporting corrupt input
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      PrimitiveValue                          │
//! │        (construction, Display, Eq/Ord/Hash via bytes)        │
//! └──────────────┬───────────────────────────────▲──────────────┘
//!                │ append_to_key                  │ decode_from_key
//!                ▼                                │
//!   ┌────────────────────────┐        ┌───────────┴────────────┐
//!   │        KeyBytes        │ bytes  │        Decoder         │
//!   │ (tag + ordered body)   ├───────►│ (cursor, Corruption)   │
//!   └────────────────────────┘        └───────────┬────────────┘
//!                                                 │
//!                                                 ▼
//!                                        ┌────────────────┐
//!                                        │     Status     │
//!                                        └────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod format;

pub mod codec;
pub mod status;
pub mod value;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use codec::{decode_key_sequence, KeyBytes};
pub use config::{Config, OutputFormat};
pub use error::{KeyToolError, Result};
pub use status::{Status, StatusCode};
pub use value::{ColumnId, ColumnIdRep, HybridTime, PrimitiveValue, ValueType};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of docdb-keys
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
