use crate::de::lenient_string;
use crate::field::SensorField;
use crate::quantity::Quantity;
use crate::timestamp::ReadingTimestamp;
use anyhow::Context;
use esd_utils::text::contains_ignore_case;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single observation from an environmental sensor box.
///
/// Field names match the readings resource (`reading_ts`, `sensor_type`, ...).
/// Records are plain values with no identity of their own; two readings with
/// the same content are interchangeable. Missing fields default to empty and
/// unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SensorReading {
    #[serde(default)]
    pub reading_ts: ReadingTimestamp,
    /// Short category code, e.g. "O3" or "CO".
    #[serde(default, deserialize_with = "lenient_string")]
    pub sensor_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub box_id: String,
    /// Human-readable sensor name, e.g. "Ozone".
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default)]
    pub reading: Quantity,
    #[serde(default, deserialize_with = "lenient_string")]
    pub unit: String,
    #[serde(default)]
    pub latitude: Quantity,
    #[serde(default)]
    pub longitude: Quantity,
}

impl SensorReading {
    /// Build a reading with numeric measurement and coordinates.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        reading_ts: &str,
        sensor_type: &str,
        box_id: &str,
        name: &str,
        reading: f64,
        unit: &str,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            reading_ts: ReadingTimestamp::parse(reading_ts),
            sensor_type: sensor_type.to_string(),
            box_id: box_id.to_string(),
            name: name.to_string(),
            reading: Quantity::Number(reading),
            unit: unit.to_string(),
            latitude: Quantity::Number(latitude),
            longitude: Quantity::Number(longitude),
        }
    }

    /// Display text for one declared field.
    pub fn field_text(&self, field: SensorField) -> String {
        match field {
            SensorField::ReadingTs => self.reading_ts.to_string(),
            SensorField::SensorType => self.sensor_type.clone(),
            SensorField::BoxId => self.box_id.clone(),
            SensorField::Name => self.name.clone(),
            SensorField::Reading => self.reading.to_string(),
            SensorField::Unit => self.unit.clone(),
            SensorField::Latitude => self.latitude.to_string(),
            SensorField::Longitude => self.longitude.to_string(),
        }
    }

    /// "lat, lon" as shown in the location column.
    pub fn location_text(&self) -> String {
        format!("{}, {}", self.latitude, self.longitude)
    }

    /// Exact match on the sensor type code.
    pub fn has_sensor_type(&self, sensor_type: &str) -> bool {
        self.sensor_type == sensor_type
    }

    /// Free-text match: the sensor type or the name contains `query`, ignoring case.
    pub fn matches_query(&self, query: &str) -> bool {
        contains_ignore_case(&self.sensor_type, query) || contains_ignore_case(&self.name, query)
    }
}

/// Parse the readings resource: a JSON array of reading objects.
///
/// Only a payload that is not a JSON array is an error. An element that is
/// not an object (such as `null`) still takes its place in the sequence, as
/// an empty reading.
pub fn parse_readings(json: &str) -> anyhow::Result<Vec<SensorReading>> {
    let values: Vec<Value> =
        serde_json::from_str(json).context("failed to parse sensor readings JSON")?;
    let readings: Vec<SensorReading> = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| reading_from_value(index, value))
        .collect();
    let unparsed = readings.iter().filter(|r| !r.reading_ts.is_valid()).count();
    if unparsed > 0 {
        log::warn!(
            "[ESD] reading: {} of {} readings have an unparseable reading_ts",
            unparsed,
            readings.len()
        );
    }
    log::info!("[ESD] reading: Parsed {} sensor readings", readings.len());
    Ok(readings)
}

fn reading_from_value(index: usize, value: Value) -> SensorReading {
    if !value.is_object() {
        log::warn!(
            "[ESD] reading: Element {} is not an object ({}), keeping an empty reading",
            index,
            value
        );
        return SensorReading::default();
    }
    SensorReading::deserialize(value).unwrap_or_else(|e| {
        log::warn!("[ESD] reading: Element {} is malformed ({}), keeping an empty reading", index, e);
        SensorReading::default()
    })
}
