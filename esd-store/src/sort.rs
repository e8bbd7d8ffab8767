//! Sort keys, direction toggling and the reading comparators.

use crate::SensorDataStore;
use esd_readings::SensorReading;
use esd_utils::text::locale_compare;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Which field family orders the displayed readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Unsorted,
    /// By `reading_ts`.
    Time,
    /// Labelled "sensor type" in the table, but orders by the trimmed `name`.
    SensorType,
}

impl SortKey {
    /// Parse an intent key. Only `time` and `sensor_type` (or `sensorType`)
    /// name a sort; anything else is `None`.
    pub fn from_name(name: &str) -> Option<SortKey> {
        match name {
            "time" => Some(SortKey::Time),
            "sensor_type" | "sensorType" => Some(SortKey::SensorType),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SortKey::Unsorted => "none",
            SortKey::Time => "time",
            SortKey::SensorType => "sensor_type",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Orient an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Active sort key and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    /// The state after a sort request for `key`.
    ///
    /// Asking again for the active key while ascending flips to descending;
    /// every other request (a different key, or the same key while
    /// descending) sorts ascending.
    pub fn toggled(self, key: SortKey) -> SortState {
        let direction = if self.key == key && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        SortState { key, direction }
    }

    pub fn is_active(&self, key: SortKey) -> bool {
        self.key == key
    }
}

/// Stable in-place orderings over a run of readings. Ties keep their
/// existing relative order in both directions.
pub trait SortReadings {
    /// Chronological by `reading_ts`; unparseable timestamps come first
    /// when ascending.
    fn sort_by_time(&mut self, direction: SortDirection);
    /// By `name` with surrounding whitespace trimmed, using browser-style
    /// collation.
    fn sort_by_name(&mut self, direction: SortDirection);
    fn sort_by_state(&mut self, state: SortState);
}

impl SortReadings for [SensorReading] {
    fn sort_by_time(&mut self, direction: SortDirection) {
        self.sort_by(|a, b| direction.apply(a.reading_ts.cmp_instant(&b.reading_ts)));
    }

    fn sort_by_name(&mut self, direction: SortDirection) {
        self.sort_by(|a, b| direction.apply(locale_compare(a.name.trim(), b.name.trim())));
    }

    fn sort_by_state(&mut self, state: SortState) {
        match state.key {
            SortKey::Unsorted => {}
            SortKey::Time => self.sort_by_time(state.direction),
            SortKey::SensorType => self.sort_by_name(state.direction),
        }
    }
}

impl SensorDataStore {
    /// Sort the displayed readings by a named key (`time` or `sensor_type`).
    ///
    /// An unrecognized key leaves the readings and the sort state untouched.
    pub fn sort_by(&mut self, key: &str) -> &[SensorReading] {
        match SortKey::from_name(key) {
            Some(key) => self.sort_by_key(key),
            None => {
                log::debug!("[ESD] sort: Ignoring unknown sort key {:?}", key);
                &self.displayed
            }
        }
    }

    /// Sort the displayed readings by `key`, toggling direction as described
    /// on [`SortState::toggled`]. `SortKey::Unsorted` is a no-op.
    pub fn sort_by_key(&mut self, key: SortKey) -> &[SensorReading] {
        if key == SortKey::Unsorted {
            return &self.displayed;
        }
        let next = self.sort.toggled(key);
        Rc::make_mut(&mut self.displayed).sort_by_state(next);
        log::debug!(
            "[ESD] sort: Sorted {} readings by {} ({:?})",
            self.displayed.len(),
            next.key,
            next.direction
        );
        self.sort = next;
        self.view_changed();
        &self.displayed
    }
}
