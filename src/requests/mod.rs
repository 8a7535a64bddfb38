use std::{io, time::Instant};

use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

mod config;
pub mod json;
mod models;
pub mod text;

pub use config::*;
pub use models::*;

use crate::catalogue::TransportCatalogue;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Document is missing key: {0}")]
    MissingKey(String),
    #[error("Could not parse line {line:?}: {reason}")]
    Parse { line: String, reason: String },
    #[error("Input ended early, expected {expected} more lines")]
    UnexpectedEnd { expected: usize },
}

impl Error {
    pub(crate) fn parse(line: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

impl TransportCatalogue {
    /// Loads stops, road distances and buses from base requests.
    ///
    /// Every stop is added before any distance or bus, whatever the order of the
    /// requests. Names that are never declared as a stop become placeholders at (0, 0).
    pub fn load_requests(mut self, requests: &[BaseRequest]) -> Self {
        self.load_stops(requests);
        self.load_distances(requests);
        self.load_buses(requests);
        self
    }

    fn load_stops(&mut self, requests: &[BaseRequest]) {
        debug!("Loading stops...");
        let now = Instant::now();
        stop_requests(requests).for_each(|stop| {
            self.add_stop(&stop.name, (stop.latitude, stop.longitude).into());
        });
        debug!("Loading stops took {:?}", now.elapsed());
    }

    fn load_distances(&mut self, requests: &[BaseRequest]) {
        debug!("Loading road distances...");
        let now = Instant::now();
        stop_requests(requests).for_each(|stop| {
            let from = self.ensure_stop(&stop.name);
            stop.road_distances.iter().for_each(|(neighbour, meters)| {
                let to = self.ensure_stop(neighbour);
                self.set_distance(from, to, *meters);
            });
        });
        debug!("Loading road distances took {:?}", now.elapsed());
    }

    fn load_buses(&mut self, requests: &[BaseRequest]) {
        debug!("Loading buses...");
        let now = Instant::now();
        requests
            .iter()
            .filter_map(|request| match request {
                BaseRequest::Bus(bus) => Some(bus),
                BaseRequest::Stop(_) => None,
            })
            .for_each(|bus| {
                let stops: Vec<_> = bus
                    .stops
                    .iter()
                    .map(|name| self.ensure_stop(name))
                    .collect();
                self.add_bus(&bus.name, stops, bus.is_roundtrip);
            });
        debug!("Loading buses took {:?}", now.elapsed());
    }

    /// Answers a single query.
    pub fn answer(&self, query: &StatQuery) -> Answer {
        match query {
            StatQuery::Bus { name } => Answer::Bus {
                name: name.clone(),
                info: self.bus_info_by_name(name),
            },
            StatQuery::Stop { name } => Answer::Stop {
                name: name.clone(),
                buses: self.stop_by_name(name).map(|_| {
                    self.buses_by_stop_name(name)
                        .into_iter()
                        .map(String::from)
                        .collect()
                }),
            },
        }
    }

    /// Answers numbered JSON requests in parallel, keeping their order.
    pub fn respond_all(&self, requests: &[StatRequest]) -> Vec<StatResponse> {
        requests
            .par_iter()
            .map(|request| match request.query() {
                Some(query) => StatResponse::from_answer(request.id, self.answer(&query)),
                None => StatResponse::invalid(request.id),
            })
            .collect()
    }
}

fn stop_requests(requests: &[BaseRequest]) -> impl Iterator<Item = &StopRequest> {
    requests.iter().filter_map(|request| match request {
        BaseRequest::Stop(stop) => Some(stop),
        BaseRequest::Bus(_) => None,
    })
}
