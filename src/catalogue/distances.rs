use std::collections::HashMap;

use crate::catalogue::StopId;

/// Road distances between ordered stop pairs, in whole meters.
#[derive(Debug, Clone, Default)]
pub(crate) struct DistanceTable {
    distances: HashMap<(StopId, StopId), u32>,
}

impl DistanceTable {
    /// Records the distance driven from `from` to `to`. The last write for a pair wins.
    pub fn set(&mut self, from: StopId, to: StopId, meters: u32) {
        self.distances.insert((from, to), meters);
    }

    fn direct(&self, from: StopId, to: StopId) -> Option<u32> {
        self.distances
            .get(&(from, to))
            .copied()
            .filter(|meters| *meters > 0)
    }

    /// Distance from `from` to `to`, falling back to the measurement taken the other way.
    pub fn resolve(&self, from: StopId, to: StopId) -> Option<u32> {
        self.direct(from, to).or_else(|| self.direct(to, from))
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }
}
