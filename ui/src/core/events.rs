//! Event-log ingestion: wire schema, whole-file parsing, per-event sample decode.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// One record from the exported event log.
///
/// The `avgResponseTime` payload is a misnomer carried over from the exporter:
/// it holds a JSON-encoded array of raw per-session samples, not an average.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    #[serde(default)]
    pub event: String,
    pub properties: EventProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventProperties {
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(default, deserialize_with = "de_epoch_seconds")]
    pub time: i64,
    #[serde(
        rename = "avgResponseTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub avg_response_time: Option<String>,
}

impl Event {
    /// Decodes the nested sample payload. `None` covers every skip case:
    /// field absent, not valid JSON, or not an array of numbers.
    pub fn decode_samples(&self) -> Option<Vec<f64>> {
        let raw = self.properties.avg_response_time.as_deref()?;
        serde_json::from_str::<Vec<f64>>(raw).ok()
    }
}

/// Exporters write `time` as either a bare number or a numeric string.
fn de_epoch_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTime {
        Number(f64),
        Text(String),
    }

    let seconds = match RawTime::deserialize(deserializer)? {
        RawTime::Number(value) => value,
        // Unparsable stamps collapse to the epoch rather than failing the file.
        RawTime::Text(value) => value.trim().parse::<f64>().unwrap_or(0.0),
    };

    Ok(seconds as i64)
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("event log is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parsed snapshot of one loaded event log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Parses a whole event-log file. Fails atomically: a malformed file
    /// yields `StoreError::Parse` and no partial store.
    pub fn from_json(raw: &str) -> Result<Self, StoreError> {
        let events: Vec<Event> = serde_json::from_str(raw)?;
        Ok(Self { events })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
