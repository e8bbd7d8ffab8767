use crate::SensorDataStore;
use esd_readings::SensorReading;
use std::rc::Rc;

/// Last free-text search result, valid while the collection revision and
/// query are unchanged.
#[derive(Debug)]
pub(crate) struct SearchCache {
    collection_rev: u64,
    query: String,
    rows: Rc<Vec<SensorReading>>,
}

impl SensorDataStore {
    /// Exact sensor-type filter over the authoritative collection.
    ///
    /// An empty value clears the filter and restores every reading in
    /// insertion order; the previous sort order is not reapplied. Always
    /// returns to the first page.
    pub fn filter_by(&mut self, sensor_type: &str) -> &[SensorReading] {
        let filtered: Vec<SensorReading> = if sensor_type.is_empty() {
            self.authoritative.clone()
        } else {
            self.authoritative
                .iter()
                .filter(|r| r.has_sensor_type(sensor_type))
                .cloned()
                .collect()
        };
        log::debug!(
            "[ESD] filter: {:?} kept {} of {} readings",
            sensor_type,
            filtered.len(),
            self.authoritative.len()
        );
        self.filter_value = sensor_type.to_string();
        self.displayed = Rc::new(filtered);
        self.page_index = 0;
        self.view_changed();
        &self.displayed
    }

    /// Free-text search: readings whose sensor type or name contains `query`,
    /// ignoring case.
    ///
    /// Always searches the full authoritative collection, never the sorted or
    /// filtered view. An empty query ends the search and the displayed
    /// readings are shown again. Always returns to the first page.
    pub fn search(&mut self, query: &str) -> Rc<Vec<SensorReading>> {
        if self.query != query {
            self.query = query.to_string();
        }
        self.page_index = 0;
        self.current_rows()
    }

    /// The rows pagination works over: the search result while a query is
    /// active, otherwise the displayed readings.
    pub fn current_rows(&self) -> Rc<Vec<SensorReading>> {
        if self.query.is_empty() {
            Rc::clone(&self.displayed)
        } else {
            self.search_results(&self.query)
        }
    }

    fn search_results(&self, query: &str) -> Rc<Vec<SensorReading>> {
        if let Some(cache) = self.search_cache.borrow().as_ref() {
            if cache.collection_rev == self.collection_rev && cache.query == query {
                return Rc::clone(&cache.rows);
            }
        }
        let rows: Rc<Vec<SensorReading>> = Rc::new(
            self.authoritative
                .iter()
                .filter(|r| r.matches_query(query))
                .cloned()
                .collect(),
        );
        log::debug!(
            "[ESD] filter: search {:?} matched {} of {} readings",
            query,
            rows.len(),
            self.authoritative.len()
        );
        *self.search_cache.borrow_mut() = Some(SearchCache {
            collection_rev: self.collection_rev,
            query: query.to_string(),
            rows: Rc::clone(&rows),
        });
        rows
    }

    /// Distinct sensor types of the displayed readings, in first-seen order.
    /// These are the filter menu's options.
    pub fn sensor_types(&self) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for reading in self.displayed.iter() {
            if !types.contains(&reading.sensor_type) {
                types.push(reading.sensor_type.clone());
            }
        }
        types
    }
}
