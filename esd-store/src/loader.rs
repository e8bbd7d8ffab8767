//! Loading the readings resource into the store.
//!
//! The resource is a JSON array of reading objects (see
//! [`esd_readings::parse_readings`]). A failed load leaves the store exactly
//! as it was; a successful one replaces everything via `initialize`.

use crate::SensorDataStore;
use anyhow::Context;
use esd_readings::parse_readings;

impl SensorDataStore {
    /// Parse `json` and initialize the store with it. Returns the number of
    /// readings loaded.
    ///
    /// # Example JSON
    /// ```text
    /// [{"reading_ts": "2019-09-10T00:00:00", "sensor_type": "O3", "box_id": "Box-A1",
    ///   "name": "Ozone", "reading": 817, "unit": "ppm",
    ///   "latitude": 51.51885, "longitude": -0.06507}]
    /// ```
    pub fn load_json(&mut self, json: &str) -> anyhow::Result<usize> {
        let readings = parse_readings(json).context("failed to load sensor readings")?;
        let count = readings.len();
        self.initialize(readings);
        log::info!("[ESD] loader: Loaded {} readings", count);
        Ok(count)
    }
}
