use tracing::warn;

use crate::{
    catalogue::{Bus, BusId, BusInfo, StopId, TransportCatalogue},
    shared::geo::Distance,
};

impl TransportCatalogue {
    /// Computes the statistics of the bus with the given name.
    /// If no bus is found with the given name None is returned.
    pub fn bus_info_by_name(&self, name: &str) -> Option<BusInfo> {
        self.bus_by_name(name).map(|bus| self.route_stats(bus))
    }

    pub fn bus_info(&self, id: BusId) -> Option<BusInfo> {
        self.bus(id).map(|bus| self.route_stats(bus))
    }

    fn route_stats(&self, bus: &Bus) -> BusInfo {
        let mut info = BusInfo {
            stop_count: bus.stop_count(),
            unique_stop_count: bus.unique_stop_count(),
            route_length: Distance::default(),
            geographic_length: Distance::default(),
            curvature: 1.0,
            missing_distances: 0,
        };
        if bus.stops.len() < 2 {
            return info;
        }

        for (from, to) in bus.hops() {
            info.geographic_length += self.geographic_distance(from, to);
            match self.distance_between(from, to) {
                Some(distance) => info.route_length += distance,
                // Staying at the same stop covers no ground
                None if from == to => (),
                None => {
                    info.missing_distances += 1;
                    warn!(
                        bus = %bus.name,
                        from = %self.stop_name(from),
                        to = %self.stop_name(to),
                        "No road distance between stops, counting it as 0"
                    );
                }
            }
        }
        info.curvature = info
            .route_length
            .ratio(&info.geographic_length)
            .unwrap_or(1.0);
        info
    }

    fn geographic_distance(&self, from: StopId, to: StopId) -> Distance {
        match (self.stop(from), self.stop(to)) {
            (Some(from), Some(to)) => from.coordinate.great_circle_distance(&to.coordinate),
            _ => Distance::default(),
        }
    }

    fn stop_name(&self, id: StopId) -> &str {
        self.stop(id).map(|stop| &*stop.name).unwrap_or("?")
    }
}
