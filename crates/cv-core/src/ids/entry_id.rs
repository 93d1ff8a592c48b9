use serde::{Deserialize, Serialize};

/// Identifier of a clipboard entry.
///
/// 剪贴板条目标识。
///
/// Host-assigned ids are positive. Entries captured locally before the host
/// has acknowledged them carry a provisional id, which is always negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(i64);

impl EntryId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Provisional id for the `seq`-th local capture (`seq` starts at 1).
    pub fn provisional(seq: u64) -> Self {
        Self(-(seq as i64))
    }

    pub fn is_provisional(&self) -> bool {
        self.0 < 0
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
