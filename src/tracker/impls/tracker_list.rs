use rand::RngExt;
use crate::tracker::structs::tracker_list::TrackerList;

impl TrackerList {
    /// `None` for an empty snapshot.
    pub fn new(indexes: Vec<usize>) -> Option<TrackerList> {
        if indexes.is_empty() {
            return None;
        }
        let start = rand::rng().random_range(0..indexes.len());
        Some(TrackerList::with_start(indexes, start))
    }

    pub fn with_start(indexes: Vec<usize>, start: usize) -> TrackerList {
        let start = if indexes.is_empty() { 0 } else { start % indexes.len() };
        TrackerList {
            indexes,
            start,
            position: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }
}

impl Iterator for TrackerList {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.position >= self.indexes.len() {
            return None;
        }
        let index = self.indexes[(self.start + self.position) % self.indexes.len()];
        self.position += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.indexes.len() - self.position;
        (remaining, Some(remaining))
    }
}
