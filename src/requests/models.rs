use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalogue::BusInfo;

/// A record that loads data into the catalogue.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRequest),
    Bus(BusRequest),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StopRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Road distances from this stop to its neighbours, in meters.
    #[serde(default)]
    pub road_distances: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusRequest {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

/// A query against a loaded catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatQuery {
    Bus { name: String },
    Stop { name: String },
}

/// A numbered query as it arrives in a JSON document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatRequest {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
}

impl StatRequest {
    /// The query this request asks for. None for unsupported request types.
    pub fn query(&self) -> Option<StatQuery> {
        let name = self.name.clone();
        match self.kind.as_str() {
            "Bus" => Some(StatQuery::Bus { name }),
            "Stop" => Some(StatQuery::Stop { name }),
            _ => None,
        }
    }
}

/// The catalogue's answer to a [`StatQuery`].
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Bus {
        name: String,
        info: Option<BusInfo>,
    },
    Stop {
        name: String,
        buses: Option<Vec<String>>,
    },
}

/// JSON response to a [`StatRequest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Bus {
        request_id: i64,
        curvature: f64,
        route_length: f64,
        stop_count: usize,
        unique_stop_count: usize,
    },
    Stop {
        request_id: i64,
        buses: Vec<String>,
    },
    Error {
        request_id: i64,
        error_message: String,
    },
}

pub const NOT_FOUND: &str = "not found";
pub const INVALID_QUERY_TYPE: &str = "invalid query type";

impl StatResponse {
    pub fn from_answer(request_id: i64, answer: Answer) -> Self {
        match answer {
            Answer::Bus {
                info: Some(info), ..
            } => Self::Bus {
                request_id,
                curvature: info.curvature,
                route_length: info.route_length.as_meters(),
                stop_count: info.stop_count,
                unique_stop_count: info.unique_stop_count,
            },
            Answer::Stop {
                buses: Some(buses), ..
            } => Self::Stop { request_id, buses },
            Answer::Bus { info: None, .. } | Answer::Stop { buses: None, .. } => Self::Error {
                request_id,
                error_message: NOT_FOUND.into(),
            },
        }
    }

    pub fn invalid(request_id: i64) -> Self {
        Self::Error {
            request_id,
            error_message: INVALID_QUERY_TYPE.into(),
        }
    }
}
