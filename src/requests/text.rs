//! Line based request format.
//!
//! ```text
//! 2
//! Stop Tolstopaltsevo: 55.611087, 37.20829, 3900m to Marushkino
//! Bus 256: Tolstopaltsevo > Marushkino > Tolstopaltsevo
//! 1
//! Bus 256
//! ```

use std::collections::BTreeMap;

use crate::requests::{self, BaseRequest, BusRequest, StatQuery, StopRequest};

const STOP_PREFIX: &str = "Stop ";
const BUS_PREFIX: &str = "Bus ";
const DISTANCE_SEPARATOR: &str = "m to ";

#[derive(Debug, Clone, PartialEq)]
pub enum TextQuery {
    Stat(StatQuery),
    /// A line that is neither a bus nor a stop query, kept verbatim.
    Invalid(String),
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TextInput {
    pub base_requests: Vec<BaseRequest>,
    pub queries: Vec<TextQuery>,
}

/// Parses a whole text document: a counted block of base lines
/// followed by an optional counted block of queries.
pub fn parse(input: &str) -> Result<TextInput, requests::Error> {
    let mut lines = input.lines().map(str::trim).filter(|line| !line.is_empty());

    let base_count = match lines.next() {
        Some(line) => parse_count(line)?,
        None => return Ok(TextInput::default()),
    };
    let base_requests = (0..base_count)
        .map(|read| match lines.next() {
            Some(line) => parse_base_line(line),
            None => Err(requests::Error::UnexpectedEnd {
                expected: base_count - read,
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let query_count = match lines.next() {
        Some(line) => parse_count(line)?,
        None => 0,
    };
    let queries = (0..query_count)
        .map(|read| {
            lines
                .next()
                .map(parse_query)
                .ok_or(requests::Error::UnexpectedEnd {
                    expected: query_count - read,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TextInput {
        base_requests,
        queries,
    })
}

fn parse_count(line: &str) -> Result<usize, requests::Error> {
    line.parse()
        .map_err(|_| requests::Error::parse(line, "expected a line count"))
}

/// Parses `Stop NAME: LAT, LNG[, Dm to OTHER]*` or `Bus NAME: A > B > A` / `Bus NAME: A - B`.
pub fn parse_base_line(line: &str) -> Result<BaseRequest, requests::Error> {
    let (head, body) = line
        .split_once(':')
        .ok_or_else(|| requests::Error::parse(line, "missing ':' after the name"))?;
    if let Some(name) = head.strip_prefix(STOP_PREFIX) {
        parse_stop(line, name.trim(), body).map(BaseRequest::Stop)
    } else if let Some(name) = head.strip_prefix(BUS_PREFIX) {
        parse_bus(line, name.trim(), body).map(BaseRequest::Bus)
    } else {
        Err(requests::Error::parse(line, "expected a Stop or Bus line"))
    }
}

fn parse_stop(line: &str, name: &str, body: &str) -> Result<StopRequest, requests::Error> {
    let mut parts = body.split(',').map(str::trim);
    let mut coordinate = || {
        parts
            .next()
            .and_then(|part| part.parse::<f64>().ok())
            .ok_or_else(|| requests::Error::parse(line, "expected latitude and longitude"))
    };
    let latitude = coordinate()?;
    let longitude = coordinate()?;

    let road_distances = parts
        .filter(|part| !part.is_empty())
        .map(|part| -> Result<(String, u32), requests::Error> {
            let (meters, neighbour) = part
                .split_once(DISTANCE_SEPARATOR)
                .ok_or_else(|| requests::Error::parse(line, "expected 'Dm to STOP'"))?;
            let meters = meters
                .trim()
                .parse::<u32>()
                .map_err(|_| requests::Error::parse(line, "distance is not a whole number"))?;
            Ok((neighbour.trim().to_string(), meters))
        })
        .collect::<Result<BTreeMap<_, _>, _>>()?;

    Ok(StopRequest {
        name: name.to_string(),
        latitude,
        longitude,
        road_distances,
    })
}

fn parse_bus(line: &str, name: &str, body: &str) -> Result<BusRequest, requests::Error> {
    let is_roundtrip = body.contains('>');
    let separator = if is_roundtrip { '>' } else { '-' };
    let stops: Vec<String> = body
        .split(separator)
        .map(str::trim)
        .filter(|stop| !stop.is_empty())
        .map(String::from)
        .collect();
    if stops.is_empty() {
        return Err(requests::Error::parse(line, "bus has no stops"));
    }
    Ok(BusRequest {
        name: name.to_string(),
        stops,
        is_roundtrip,
    })
}

/// Parses `Bus NAME` or `Stop NAME`; anything else is kept as an invalid query.
pub fn parse_query(line: &str) -> TextQuery {
    let line = line.trim();
    if let Some(name) = line.strip_prefix(BUS_PREFIX) {
        TextQuery::Stat(StatQuery::Bus {
            name: name.trim().to_string(),
        })
    } else if let Some(name) = line.strip_prefix(STOP_PREFIX) {
        TextQuery::Stat(StatQuery::Stop {
            name: name.trim().to_string(),
        })
    } else {
        TextQuery::Invalid(line.to_string())
    }
}
