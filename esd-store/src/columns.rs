//! Table column definitions for the readings table.

use crate::sort::{SortDirection, SortKey, SortState};
use esd_readings::{SensorField, SensorReading};

/// What a column shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKey {
    Field(SensorField),
    /// "latitude, longitude" in one cell.
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub key: ColumnKey,
    /// Width in pixels.
    pub width: u32,
    /// Right-aligned numeric column.
    pub numeric: bool,
}

/// Sort arrow highlight state for a sortable header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortArrows {
    pub up: bool,
    pub down: bool,
}

pub const COLUMNS: [Column; 7] = [
    Column {
        label: "Timestamp",
        key: ColumnKey::Field(SensorField::ReadingTs),
        width: 150,
        numeric: false,
    },
    Column {
        label: "Sensor Type",
        key: ColumnKey::Field(SensorField::SensorType),
        width: 150,
        numeric: false,
    },
    Column {
        label: "Box ID",
        key: ColumnKey::Field(SensorField::BoxId),
        width: 150,
        numeric: false,
    },
    Column {
        label: "Name",
        key: ColumnKey::Field(SensorField::Name),
        width: 150,
        numeric: false,
    },
    Column {
        label: "Reading",
        key: ColumnKey::Field(SensorField::Reading),
        width: 150,
        numeric: true,
    },
    Column {
        label: "Unit",
        key: ColumnKey::Field(SensorField::Unit),
        width: 100,
        numeric: false,
    },
    Column {
        label: "Location (Lat, Lon)",
        key: ColumnKey::Location,
        width: 250,
        numeric: false,
    },
];

impl Column {
    /// Stable identifier, used as the render key.
    pub fn id(&self) -> &'static str {
        match self.key {
            ColumnKey::Field(field) => field.key(),
            ColumnKey::Location => "location",
        }
    }

    /// The sort this header requests when clicked, if it is sortable.
    /// Only the timestamp and sensor type columns are.
    pub fn sort_key(&self) -> Option<SortKey> {
        match self.key {
            ColumnKey::Field(SensorField::ReadingTs) => Some(SortKey::Time),
            ColumnKey::Field(SensorField::SensorType) => Some(SortKey::SensorType),
            _ => None,
        }
    }

    pub fn cell_text(&self, reading: &SensorReading) -> String {
        match self.key {
            ColumnKey::Field(field) => reading.field_text(field),
            ColumnKey::Location => reading.location_text(),
        }
    }

    /// Arrow highlight for this header under `sort`; `None` for columns that
    /// cannot be sorted.
    pub fn sort_arrows(&self, sort: SortState) -> Option<SortArrows> {
        let key = self.sort_key()?;
        let active = sort.is_active(key);
        Some(SortArrows {
            up: active && sort.direction == SortDirection::Ascending,
            down: active && sort.direction == SortDirection::Descending,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    #[test]
    fn only_time_and_sensor_type_are_sortable() {
        let sortable: Vec<&str> = COLUMNS
            .iter()
            .filter(|c| c.sort_key().is_some())
            .map(|c| c.label)
            .collect();
        assert_eq!(sortable, vec!["Timestamp", "Sensor Type"]);
        assert_eq!(COLUMNS[0].sort_key(), Some(SortKey::Time));
        assert_eq!(COLUMNS[1].sort_key(), Some(SortKey::SensorType));
    }

    #[test]
    fn cell_text_per_column() {
        let r = ozone();
        let cells: Vec<String> = COLUMNS.iter().map(|c| c.cell_text(&r)).collect();
        assert_eq!(
            cells,
            vec![
                "2019-09-10T00:00:00",
                "O3",
                "Box-A1",
                "Ozone",
                "817",
                "ppm",
                "51.51885, -0.06507"
            ]
        );
    }

    #[test]
    fn arrows_follow_sort_state() {
        let time = COLUMNS[0];
        let sensor_type = COLUMNS[1];
        let unsorted = SortState::default();
        assert_eq!(time.sort_arrows(unsorted), Some(SortArrows::default()));

        let asc = unsorted.toggled(SortKey::Time);
        assert_eq!(time.sort_arrows(asc), Some(SortArrows { up: true, down: false }));
        assert_eq!(sensor_type.sort_arrows(asc), Some(SortArrows::default()));

        let desc = asc.toggled(SortKey::Time);
        assert_eq!(time.sort_arrows(desc), Some(SortArrows { up: false, down: true }));

        assert_eq!(COLUMNS[4].sort_arrows(desc), None);
    }

    #[test]
    fn column_ids_are_unique() {
        let mut ids: Vec<&str> = COLUMNS.iter().map(|c| c.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), COLUMNS.len());
    }
}
