use std::{collections::HashSet, sync::Arc};

use crate::shared::{
    Identifiable,
    geo::{Coordinate, Distance},
};

/// Stable handle to a stop inside a [`TransportCatalogue`](super::TransportCatalogue).
/// Handles are only minted by the catalogue and stay valid for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub(crate) u32);

/// Stable handle to a bus inside a [`TransportCatalogue`](super::TransportCatalogue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusId(pub(crate) u32);

/// A named point where buses stop.
#[derive(Debug, Clone)]
pub struct Stop {
    /// Position in the stop arena.
    pub index: StopId,
    /// Unique, case sensitive name. Shared with every index that mentions the stop.
    pub name: Arc<str>,
    pub coordinate: Coordinate,
}

impl Identifiable for Stop {
    fn name(&self) -> &Arc<str> {
        &self.name
    }
}

/// A bus route over an ordered list of stops.
#[derive(Debug, Clone)]
pub struct Bus {
    pub index: BusId,
    pub name: Arc<str>,
    /// Stops in the order they are listed for the route.
    pub stops: Box<[StopId]>,
    /// `true` for a closed loop, `false` for an out-and-back line.
    pub is_round_trip: bool,
}

impl Identifiable for Bus {
    fn name(&self) -> &Arc<str> {
        &self.name
    }
}

impl Bus {
    /// Number of stops visited along the full traversal.
    /// An out-and-back line visits its turning stop once.
    pub fn stop_count(&self) -> usize {
        if self.is_round_trip {
            self.stops.len()
        } else {
            (self.stops.len() * 2).saturating_sub(1)
        }
    }

    pub fn unique_stop_count(&self) -> usize {
        self.stops.iter().collect::<HashSet<_>>().len()
    }

    /// Directed stop pairs driven along the route.
    ///
    /// A loop gets a closing hop from the last stop back to the first unless the
    /// listed sequence already ends where it started. An out-and-back line is
    /// driven forward and then backward, each direction as its own hop.
    pub fn hops(&self) -> impl Iterator<Item = (StopId, StopId)> + '_ {
        let forward = self.stops.windows(2).map(|pair| (pair[0], pair[1]));
        let closing = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) if self.is_round_trip && first != last => {
                Some((*last, *first))
            }
            _ => None,
        };
        let backward = (!self.is_round_trip)
            .then(|| self.stops.windows(2).rev().map(|pair| (pair[1], pair[0])))
            .into_iter()
            .flatten();
        forward.chain(closing).chain(backward)
    }
}

/// Statistics of a single bus route.
#[derive(Debug, Clone, PartialEq)]
pub struct BusInfo {
    pub stop_count: usize,
    pub unique_stop_count: usize,
    /// Sum of road distances along the traversal.
    pub route_length: Distance,
    /// Sum of great circle distances along the same traversal.
    pub geographic_length: Distance,
    /// `route_length / geographic_length`, 1.0 when the route has no geographic length.
    pub curvature: f64,
    /// Hops that had no road distance in either direction and were counted as zero.
    pub missing_distances: usize,
}
