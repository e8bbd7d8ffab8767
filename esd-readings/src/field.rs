//! The declared fields of a sensor reading and the add-sensor form buffer.
//!
//! The form renders one labelled text input per [`SensorField`], in the
//! order of [`SensorField::ALL`]. [`SensorDraft`] holds what has been typed
//! so far and turns it into a [`SensorReading`] without validating anything.

use crate::quantity::Quantity;
use crate::reading::SensorReading;
use crate::timestamp::ReadingTimestamp;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorField {
    ReadingTs,
    SensorType,
    BoxId,
    Name,
    Reading,
    Unit,
    Latitude,
    Longitude,
}

impl SensorField {
    /// All fields in form order.
    pub const ALL: [SensorField; 8] = [
        SensorField::ReadingTs,
        SensorField::SensorType,
        SensorField::BoxId,
        SensorField::Name,
        SensorField::Reading,
        SensorField::Unit,
        SensorField::Latitude,
        SensorField::Longitude,
    ];

    /// Key used in the readings resource.
    pub fn key(self) -> &'static str {
        match self {
            SensorField::ReadingTs => "reading_ts",
            SensorField::SensorType => "sensor_type",
            SensorField::BoxId => "box_id",
            SensorField::Name => "name",
            SensorField::Reading => "reading",
            SensorField::Unit => "unit",
            SensorField::Latitude => "latitude",
            SensorField::Longitude => "longitude",
        }
    }

    /// Form label: the key with its first underscore turned into a space,
    /// upper-cased ("reading_ts" -> "READING TS").
    pub fn label(self) -> String {
        self.key().replacen('_', " ", 1).to_uppercase()
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SensorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Text entered in the add-sensor form, one value per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorDraft {
    values: [String; 8],
}

impl SensorDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: SensorField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: SensorField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True until something has been typed into any field.
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(|v| v.is_empty())
    }

    /// Build a reading from the entered text, as-is.
    ///
    /// Numeric fields keep the exact text typed; the timestamp text is parsed
    /// so the new reading still takes part in time ordering when it is valid.
    pub fn to_reading(&self) -> SensorReading {
        SensorReading {
            reading_ts: ReadingTimestamp::parse(self.get(SensorField::ReadingTs)),
            sensor_type: self.get(SensorField::SensorType).to_string(),
            box_id: self.get(SensorField::BoxId).to_string(),
            name: self.get(SensorField::Name).to_string(),
            reading: Quantity::from(self.get(SensorField::Reading)),
            unit: self.get(SensorField::Unit).to_string(),
            latitude: Quantity::from(self.get(SensorField::Latitude)),
            longitude: Quantity::from(self.get(SensorField::Longitude)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let labels: Vec<String> = SensorField::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec![
                "READING TS",
                "SENSOR TYPE",
                "BOX ID",
                "NAME",
                "READING",
                "UNIT",
                "LATITUDE",
                "LONGITUDE"
            ]
        );
    }

    #[test]
    fn test_field_display_is_json_key() {
        assert_eq!(SensorField::BoxId.to_string(), "box_id");
        assert_eq!(SensorField::ReadingTs.to_string(), "reading_ts");
    }

    #[test]
    fn test_draft_accepts_anything() {
        let mut draft = SensorDraft::new();
        assert!(draft.is_blank());
        draft.set(SensorField::SensorType, "NO2");
        draft.set(SensorField::Name, "Nitrogen dioxide");
        draft.set(SensorField::Reading, "lots");
        draft.set(SensorField::ReadingTs, "2021-01-01T00:00:00");

        let reading = draft.to_reading();
        assert_eq!(reading.sensor_type, "NO2");
        assert_eq!(reading.reading.to_string(), "lots");
        assert_eq!(reading.box_id, "");
        assert!(reading.reading_ts.is_valid());
        assert_eq!(reading.field_text(SensorField::Name), "Nitrogen dioxide");
    }

    #[test]
    fn test_draft_clear() {
        let mut draft = SensorDraft::new();
        draft.set(SensorField::Unit, "ppm");
        assert_eq!(draft.get(SensorField::Unit), "ppm");
        draft.clear();
        assert!(draft.is_blank());
    }
}
