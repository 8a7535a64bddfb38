use std::sync::Arc;

mod arena;
mod distances;
mod membership;
mod models;
mod stats;

pub use models::*;

use arena::Arena;
use distances::DistanceTable;
use membership::MembershipIndex;
use tracing::debug;

use crate::shared::geo::{Coordinate, Distance};

/// In-memory catalogue of stops and bus routes.
///
/// Loading goes through the `&mut self` methods; every query only needs `&self`,
/// so a fully loaded catalogue can be shared between threads as is.
#[derive(Debug, Clone, Default)]
pub struct TransportCatalogue {
    stops: Arena<Stop>,
    buses: Arena<Bus>,
    distances: DistanceTable,
    membership: MembershipIndex,
}

impl TransportCatalogue {
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds a stop, or moves an existing stop with the same name to `coordinate`.
    /// Buses and distances that already reference the stop observe the new position.
    pub fn add_stop(&mut self, name: &str, coordinate: Coordinate) -> StopId {
        if let Some(index) = self.stops.find(name)
            && let Some(stop) = self.stops.get_mut(index)
        {
            stop.coordinate = coordinate;
            return stop.index;
        }
        let index = StopId(self.stops.next_index());
        self.stops.push(Stop {
            index,
            name: name.into(),
            coordinate,
        });
        index
    }

    /// Returns the stop with the given name, creating it at (0, 0) if it is unknown.
    /// A later [`add_stop`](Self::add_stop) with the same name fills in the real position.
    pub fn ensure_stop(&mut self, name: &str) -> StopId {
        match self.stops.find(name) {
            Some(index) => StopId(index),
            None => {
                debug!("Creating placeholder stop {name}");
                self.add_stop(name, Coordinate::default())
            }
        }
    }

    /// Registers a bus over the given stops and indexes it under each stop it serves.
    /// The stop handles must come from this catalogue.
    pub fn add_bus<S>(&mut self, name: &str, stops: S, is_round_trip: bool) -> BusId
    where
        S: Into<Box<[StopId]>>,
    {
        let stops: Box<[StopId]> = stops.into();
        debug_assert!(
            stops.iter().all(|stop| self.stops.get(stop.0).is_some()),
            "bus {name} references a stop from another catalogue"
        );
        let index = BusId(self.buses.next_index());
        let name: Arc<str> = name.into();
        stops
            .iter()
            .for_each(|stop| self.membership.insert(*stop, name.clone()));
        self.buses.push(Bus {
            index,
            name,
            stops,
            is_round_trip,
        });
        index
    }

    /// Records the road distance driven from `from` to `to`.
    pub fn set_distance(&mut self, from: StopId, to: StopId, meters: u32) {
        self.distances.set(from, to, meters);
    }

    /// Get a stop with the given name.
    /// If no stop is found with the given name None is returned.
    pub fn stop_by_name(&self, name: &str) -> Option<&Stop> {
        self.stops.find(name).and_then(|index| self.stops.get(index))
    }

    /// Get a bus with the given name.
    /// When several buses were added under one name the latest one is returned.
    pub fn bus_by_name(&self, name: &str) -> Option<&Bus> {
        self.buses.find(name).and_then(|index| self.buses.get(index))
    }

    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.0)
    }

    pub fn bus(&self, id: BusId) -> Option<&Bus> {
        self.buses.get(id.0)
    }

    /// All stops in insertion order.
    pub fn stops(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter()
    }

    /// All buses in insertion order.
    pub fn buses(&self) -> impl Iterator<Item = &Bus> {
        self.buses.iter()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    pub fn distance_count(&self) -> usize {
        self.distances.len()
    }

    /// Road distance from `from` to `to`.
    /// Falls back to the distance registered the other way; None if neither exists.
    pub fn distance_between(&self, from: StopId, to: StopId) -> Option<Distance> {
        self.distances
            .resolve(from, to)
            .map(|meters| Distance::from_meters(meters as f64))
    }

    /// Names of the buses that serve the named stop, sorted lexicographically.
    /// Unknown stops and stops without buses both give an empty list;
    /// use [`stop_by_name`](Self::stop_by_name) to tell them apart.
    pub fn buses_by_stop_name(&self, stop_name: &str) -> Vec<&str> {
        match self.stops.find(stop_name) {
            Some(index) => self.membership.buses_for(StopId(index)).collect(),
            None => Vec::new(),
        }
    }
}
