use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilepathStats {
    pub total_mb: u64,
    pub used_mb: u64,
}
