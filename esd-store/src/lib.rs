//! In-memory store for environmental sensor readings.
//!
//! [`SensorDataStore`] owns the authoritative collection (every reading, in
//! insertion order) and the displayed collection (what the table currently
//! shows after sorting and filtering). Presentation code never touches either
//! vector directly; it submits intents and reads back derived output:
//!
//! - [`sort_by`](SensorDataStore::sort_by): order the displayed readings,
//!   toggling direction on repeated requests for the same key
//! - [`filter_by`](SensorDataStore::filter_by): exact sensor-type filter over
//!   the authoritative collection
//! - [`search`](SensorDataStore::search): case-insensitive free-text filter
//!   over the authoritative collection, memoized per query
//! - [`append_sensor`](SensorDataStore::append_sensor): add a reading to both
//!   collections
//! - [`paginate`](SensorDataStore::paginate): select a window of
//!   [`PAGE_SIZE`] rows
//!
//! # Usage
//!
//! ```rust
//! use esd_store::SensorDataStore;
//!
//! let mut store = SensorDataStore::new();
//! store
//!     .load_json(r#"[{"reading_ts": "2019-09-10T00:00:00", "sensor_type": "O3", "name": "Ozone"}]"#)
//!     .unwrap();
//! store.sort_by("time");
//! let page = store.paginate(0);
//! assert_eq!(page.range.to_string(), "1-1 of 1");
//! ```
//!
//! The store is single-threaded: derived results are cached behind
//! `RefCell`s and shared through `Rc`.

pub mod columns;
mod filter;
mod loader;
pub mod page;
pub mod sort;
mod view;

pub use columns::{Column, ColumnKey, SortArrows, COLUMNS};
pub use esd_readings::{SensorDraft, SensorField, SensorReading};
pub use page::{page_items, DisplayRange, Page, PageItem, PAGE_SIZE};
pub use sort::{SortDirection, SortKey, SortReadings, SortState};
pub use view::View;

use filter::SearchCache;
use std::cell::RefCell;
use std::rc::Rc;
use view::ViewKey;

/// Owner of the sensor reading collection and the current view parameters.
#[derive(Debug, Default)]
pub struct SensorDataStore {
    /// Every reading, in insertion order.
    authoritative: Vec<SensorReading>,
    /// Readings as currently sorted and filtered.
    displayed: Rc<Vec<SensorReading>>,
    sort: SortState,
    filter_value: String,
    query: String,
    page_index: usize,
    /// Bumped whenever `authoritative` changes.
    collection_rev: u64,
    /// Bumped whenever `displayed` or `sort` changes.
    view_rev: u64,
    search_cache: RefCell<Option<SearchCache>>,
    view_cache: RefCell<Option<(ViewKey, Rc<View>)>>,
}

impl SensorDataStore {
    /// Create an empty store: unsorted, unfiltered, first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all state with `records`, in the given order.
    ///
    /// Both collections become `records`; sort, filter, search and page are
    /// reset to their initial values.
    pub fn initialize(&mut self, records: Vec<SensorReading>) {
        log::info!("[ESD] store: Initialized with {} readings", records.len());
        self.displayed = Rc::new(records.clone());
        self.authoritative = records;
        self.sort = SortState::default();
        self.filter_value.clear();
        self.query.clear();
        self.page_index = 0;
        self.collection_changed();
        self.view_changed();
    }

    /// Append a reading to the end of both collections.
    ///
    /// The reading is shown immediately even when it does not match the
    /// active filter. Nothing about it is validated.
    pub fn append_sensor(&mut self, record: SensorReading) {
        log::debug!(
            "[ESD] store: Appending {:?} reading from {:?}",
            record.sensor_type,
            record.box_id
        );
        self.authoritative.push(record.clone());
        Rc::make_mut(&mut self.displayed).push(record);
        self.collection_changed();
        self.view_changed();
    }

    /// Every reading, in insertion order.
    pub fn authoritative(&self) -> &[SensorReading] {
        &self.authoritative
    }

    /// Readings as currently sorted and filtered, ignoring any search query.
    pub fn displayed(&self) -> &[SensorReading] {
        &self.displayed
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort.key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort.direction
    }

    /// Active exact sensor-type filter; empty when none.
    pub fn filter_value(&self) -> &str {
        &self.filter_value
    }

    /// Active free-text search query; empty when none.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn is_empty(&self) -> bool {
        self.authoritative.is_empty()
    }

    fn collection_changed(&mut self) {
        self.collection_rev = self.collection_rev.wrapping_add(1);
    }

    fn view_changed(&mut self) {
        self.view_rev = self.view_rev.wrapping_add(1);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use esd_readings::SensorReading;

    pub(crate) const FIXTURE_JSON: &str = include_str!("../../fixtures/sensor_readings.json");

    pub(crate) fn ozone() -> SensorReading {
        SensorReading::new(
            "2019-09-10T00:00:00",
            "O3",
            "Box-A1",
            "Ozone",
            817.0,
            "ppm",
            51.51885,
            -0.06507,
        )
    }

    pub(crate) fn carbon_monoxide() -> SensorReading {
        SensorReading::new(
            "2020-09-10T00:00:00",
            "CO",
            "Box-A1",
            "Carbon monoxide",
            800.0,
            "ppm",
            51.51885,
            -0.06507,
        )
    }

    pub(crate) fn nitrogen_dioxide() -> SensorReading {
        SensorReading::new(
            "2021-03-01T12:00:00",
            "NO2",
            "Box-B2",
            "Nitrogen dioxide",
            41.0,
            "ppm",
            51.50137,
            -0.11903,
        )
    }

    /// The two-reading collection: O3 (2019) then CO (2020).
    pub(crate) fn two_readings() -> Vec<SensorReading> {
        vec![ozone(), carbon_monoxide()]
    }

    /// `n` readings with distinct box ids "Box-0".."Box-{n-1}".
    pub(crate) fn numbered(n: usize) -> Vec<SensorReading> {
        (0..n)
            .map(|i| {
                let mut r = ozone();
                r.box_id = format!("Box-{}", i);
                r
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn store_starts_empty_and_unsorted() {
        let store = SensorDataStore::new();
        assert!(store.is_empty());
        assert_eq!(store.sort_key(), SortKey::Unsorted);
        assert_eq!(store.sort_direction(), SortDirection::Ascending);
        assert_eq!(store.filter_value(), "");
        assert_eq!(store.page_index(), 0);
        assert!(store.displayed().is_empty());
    }

    #[test]
    fn initialize_replaces_prior_state() {
        let mut store = SensorDataStore::new();
        store.initialize(numbered(5));
        store.sort_by("sensor_type");
        store.filter_by("O3");
        store.paginate(3);

        store.initialize(two_readings());
        assert_eq!(store.authoritative(), two_readings().as_slice());
        assert_eq!(store.displayed(), two_readings().as_slice());
        assert_eq!(store.sort_key(), SortKey::Unsorted);
        assert_eq!(store.filter_value(), "");
        assert_eq!(store.page_index(), 0);
    }

    #[test]
    fn append_lands_last_in_both_collections() {
        let mut store = SensorDataStore::new();
        store.initialize(two_readings());
        store.append_sensor(nitrogen_dioxide());

        assert_eq!(store.authoritative().len(), 3);
        assert_eq!(store.displayed().len(), 3);
        assert_eq!(store.authoritative().last(), Some(&nitrogen_dioxide()));
        assert_eq!(store.displayed().last(), Some(&nitrogen_dioxide()));
        assert_eq!(store.authoritative()[..2], two_readings()[..]);
    }

    #[test]
    fn append_bypasses_active_filter() {
        let mut store = SensorDataStore::new();
        store.initialize(two_readings());
        store.filter_by("CO");
        store.append_sensor(nitrogen_dioxide());

        let types: Vec<&str> = store.displayed().iter().map(|r| r.sensor_type.as_str()).collect();
        assert_eq!(types, vec!["CO", "NO2"]);
        assert_eq!(store.filter_value(), "CO");
    }

    #[test]
    fn append_accepts_unvalidated_draft() {
        let mut store = SensorDataStore::new();
        let mut draft = SensorDraft::new();
        draft.set(SensorField::Reading, "not a number");
        store.append_sensor(draft.to_reading());

        assert_eq!(store.authoritative().len(), 1);
        assert_eq!(store.displayed()[0].reading.to_string(), "not a number");
        assert_eq!(store.displayed()[0].sensor_type, "");
    }

    #[test]
    fn fixture_loads_into_store() {
        let mut store = SensorDataStore::new();
        let count = store.load_json(FIXTURE_JSON).unwrap();
        assert_eq!(count, 15);
        assert_eq!(store.authoritative().len(), 15);
        assert_eq!(store.sensor_types(), vec!["O3", "CO", "NO2", "TEMP", "RH"]);
    }
}
