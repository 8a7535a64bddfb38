use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
};

use crate::catalogue::StopId;

/// Reverse index from a stop to the names of the buses serving it.
#[derive(Debug, Clone, Default)]
pub(crate) struct MembershipIndex {
    stop_to_buses: HashMap<StopId, BTreeSet<Arc<str>>>,
}

impl MembershipIndex {
    pub fn insert(&mut self, stop: StopId, bus_name: Arc<str>) {
        self.stop_to_buses.entry(stop).or_default().insert(bus_name);
    }

    /// Bus names in lexicographic order. Empty for stops no bus serves.
    pub fn buses_for(&self, stop: StopId) -> impl Iterator<Item = &str> {
        self.stop_to_buses
            .get(&stop)
            .into_iter()
            .flat_map(|buses| buses.iter().map(|name| &**name))
    }
}
