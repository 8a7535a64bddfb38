use std::io::{Read, Write};

use serde_json::Value;

use crate::requests::{self, BaseRequest, Config, StatRequest, StatResponse};

/// A request document: data to load and queries to answer.
#[derive(Debug, Default, Clone)]
pub struct Document {
    pub base_requests: Vec<BaseRequest>,
    pub stat_requests: Vec<StatRequest>,
}

#[derive(Default)]
pub struct JsonReader {
    config: Config,
}

impl JsonReader {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn read<R: Read>(&self, reader: R) -> Result<Document, requests::Error> {
        let value: Value = serde_json::from_reader(reader)?;
        self.split_document(value)
    }

    pub fn parse(&self, input: &str) -> Result<Document, requests::Error> {
        let value: Value = serde_json::from_str(input)?;
        self.split_document(value)
    }

    /// The base request array is required, the stat request array is optional.
    fn split_document(&self, mut value: Value) -> Result<Document, requests::Error> {
        let base_requests = value
            .get_mut(&self.config.base_requests_key)
            .map(Value::take)
            .ok_or_else(|| requests::Error::MissingKey(self.config.base_requests_key.clone()))?;
        let stat_requests = value
            .get_mut(&self.config.stat_requests_key)
            .map(Value::take)
            .unwrap_or_else(|| Value::Array(Vec::new()));
        Ok(Document {
            base_requests: serde_json::from_value(base_requests)?,
            stat_requests: serde_json::from_value(stat_requests)?,
        })
    }
}

pub fn write_responses<W: Write>(
    writer: W,
    responses: &[StatResponse],
) -> Result<(), requests::Error> {
    serde_json::to_writer_pretty(writer, responses)?;
    Ok(())
}
