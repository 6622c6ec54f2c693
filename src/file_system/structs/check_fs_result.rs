use serde::Serialize;

/// Counts are -1 when the tracker did not report them.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckFsResult {
    pub fixed: i64,
    pub total: i64,
}
