/// A copy of a partition taken under the read lock, iterated from a random
/// start so load spreads across trackers. Yields every index once.
#[derive(Debug, Clone)]
pub struct TrackerList {
    pub(crate) indexes: Vec<usize>,
    pub(crate) start: usize,
    pub(crate) position: usize,
}
