/// Every registered tracker index is in exactly one of the two sets.
#[derive(Debug, Clone, Default)]
pub struct TrackerPartitions {
    pub(crate) active: Vec<usize>,
    pub(crate) inactive: Vec<usize>,
}
