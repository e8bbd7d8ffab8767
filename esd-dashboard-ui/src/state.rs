//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The readings themselves live in one `SensorDataStore`; components only call
//! its intent methods and never edit the collections directly.

use dioxus::prelude::*;
use esd_readings::SensorDraft;
use esd_store::SensorDataStore;

/// Shared application state for the sensor dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Sensor readings and the current view parameters
    pub store: Signal<SensorDataStore>,
    /// Whether the readings resource is still being fetched
    pub loading: Signal<bool>,
    /// Error message if loading failed
    pub error_msg: Signal<Option<String>>,
    /// Whether the sensor-type filter menu is open
    pub filter_menu_open: Signal<bool>,
    /// Whether the add-sensor dialog is open
    pub dialog_open: Signal<bool>,
    /// Text typed into the add-sensor dialog so far
    pub draft: Signal<SensorDraft>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            store: Signal::new(SensorDataStore::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            filter_menu_open: Signal::new(false),
            dialog_open: Signal::new(false),
            draft: Signal::new(SensorDraft::new()),
        }
    }
}
