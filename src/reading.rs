//! Normalized glucose readings and feed decoding
//!
//! The Nightscout entries endpoint serves `{sgv, dateString}` objects,
//! newest first. Decoding is tolerant: an entry with a missing or
//! non-numeric value, or an unparseable timestamp, is skipped with a
//! warning instead of failing the whole fetch cycle.

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MonitorError;

/// One normalized glucose data point (mg/dL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub sgv: u16,
    pub timestamp: DateTime<Utc>,
}

impl Reading {
    pub fn new(sgv: u16, timestamp: DateTime<Utc>) -> Self {
        Self { sgv, timestamp }
    }
}

/// Raw feed entry as served by the entries endpoint.
///
/// Both fields are optional at the wire level so that one bad entry
/// degrades in `normalize` rather than failing the array decode.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedEntry {
    #[serde(default)]
    pub sgv: Option<Value>,
    #[serde(rename = "dateString", default)]
    pub date_string: Option<String>,
}

impl FeedEntry {
    /// Normalize one entry into a `Reading`.
    pub fn normalize(&self) -> Result<Reading, MonitorError> {
        let sgv = self
            .sgv
            .as_ref()
            .and_then(Value::as_f64)
            .ok_or_else(|| MonitorError::MalformedReading("missing or non-numeric sgv".into()))?;

        if !sgv.is_finite() || !(0.0..=1000.0).contains(&sgv) {
            return Err(MonitorError::MalformedReading(format!(
                "sgv out of range: {}",
                sgv
            )));
        }

        let raw = self
            .date_string
            .as_deref()
            .ok_or_else(|| MonitorError::MalformedReading("missing dateString".into()))?;

        let timestamp = DateTime::parse_from_rfc3339(raw)
            .map_err(|e| {
                MonitorError::MalformedReading(format!("unparseable dateString {:?}: {}", raw, e))
            })?
            .with_timezone(&Utc);

        Ok(Reading::new(sgv.round() as u16, timestamp))
    }
}

/// Decode a fetched feed body into normalized readings, newest first.
///
/// Malformed entries are skipped with a warning; at most the two most
/// recent valid readings are kept. An empty result is not an error
/// here — the composer reports `NoData` for that case.
pub fn decode_feed(body: &str) -> Result<Vec<Reading>, MonitorError> {
    let entries: Vec<FeedEntry> = serde_json::from_str(body)?;
    let mut readings: Vec<Reading> = Vec::with_capacity(2);

    for entry in &entries {
        match entry.normalize() {
            Ok(reading) => readings.push(reading),
            Err(e) => warn!("Skipping feed entry: {}", e),
        }
        if readings.len() == 2 {
            break;
        }
    }

    Ok(readings)
}
