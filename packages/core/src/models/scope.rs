//! Memo scope: the grouping boundary a forest is built within.

use std::fmt;

/// Owning scope of a memo forest.
///
/// Memos belong either to a specific facility or to a facility-less general
/// bucket. Scopes never share trees; every tree operation runs over the flat
/// list of a single scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoScope {
    /// Memos not associated with any facility.
    General,
    /// Memos owned by the facility with the given id.
    Facility(i64),
}

impl MemoScope {
    /// The facility id, if this scope is facility-bound.
    pub fn facility_id(&self) -> Option<i64> {
        match self {
            MemoScope::General => None,
            MemoScope::Facility(id) => Some(*id),
        }
    }
}

impl fmt::Display for MemoScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoScope::General => write!(f, "general"),
            MemoScope::Facility(id) => write!(f, "facility {}", id),
        }
    }
}
