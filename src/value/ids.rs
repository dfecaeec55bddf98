//! Identifier newtypes
//!
//! `ColumnId` and `HybridTime` wrap plain integers so the codec can pick the
//! right encoding and formatting without guessing from the numeric type.

use std::fmt;

use crate::error::Result;
use crate::status::Status;

/// Underlying integer representation of a column id
pub type ColumnIdRep = i32;

/// Non-negative column identifier
///
/// A negative id is never representable. [`ColumnId::new`] panics on one,
/// since it means the caller's own bookkeeping is broken; use
/// [`ColumnId::try_new`] for ids that come from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ColumnId(ColumnIdRep);

impl ColumnId {
    pub const MAX: ColumnId = ColumnId(ColumnIdRep::MAX);

    #[track_caller]
    pub fn new(rep: ColumnIdRep) -> Self {
        assert!(rep >= 0, "Check failed: column id must be non-negative, got {}", rep);
        Self(rep)
    }

    /// Checked construction from any integer
    pub fn try_new(rep: i64) -> Result<Self> {
        if rep < 0 || rep > i64::from(ColumnIdRep::MAX) {
            return Err(Status::invalid_argument(format!(
                "Column id out of range [0, {}]: {}",
                ColumnIdRep::MAX,
                rep
            )));
        }
        Ok(Self(rep as ColumnIdRep))
    }

    /// Replace the id in place, with the same check as [`ColumnId::new`]
    #[track_caller]
    pub fn set(&mut self, rep: ColumnIdRep) {
        *self = Self::new(rep);
    }

    pub fn rep(self) -> ColumnIdRep {
        self.0
    }
}

impl TryFrom<i64> for ColumnId {
    type Error = Status;

    fn try_from(rep: i64) -> Result<Self> {
        Self::try_new(rep)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hybrid logical timestamp
///
/// Unsigned 64 bits; the all-ones pattern is the `Max` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct HybridTime(u64);

impl HybridTime {
    pub const MIN: HybridTime = HybridTime(0);
    pub const MAX: HybridTime = HybridTime(u64::MAX);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn is_max(self) -> bool {
        self == Self::MAX
    }
}

impl From<u64> for HybridTime {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for HybridTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_max() {
            f.write_str("HT(Max)")
        } else {
            write!(f, "HT({})", self.0)
        }
    }
}
