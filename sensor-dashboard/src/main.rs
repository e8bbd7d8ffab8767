//! Environmental Sensor Dashboard
//!
//! Shows air-quality and climate sensor readings in a paginated table that
//! can be sorted by time or sensor type, filtered to one sensor type,
//! searched by free text, and extended with hand-entered readings.
//!
//! Data flow:
//! 1. On mount, the readings are fetched once from [`DATA_URL`].
//! 2. The JSON array is loaded into the shared `SensorDataStore`; a failure
//!    is logged and shown, leaving the table empty.
//! 3. Components submit intents (sort, filter, search, append, paginate) to
//!    the store and render its cached view.

use dioxus::prelude::*;
use esd_dashboard_ui::components::{
    AddSensorDialog, DashboardHeader, ErrorDisplay, LoadingSpinner, SensorTable,
};
use esd_dashboard_ui::js_bridge;
use esd_dashboard_ui::state::AppState;

/// Readings resource, relative to the page.
const DATA_URL: &str = "/data/sensor_readings.json";

const ROOT_NAME: &str = "sensor-dashboard-root";

const TITLE: &str = "Environmental Sensor Dashboard";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_NAME))
        .launch(App);
}

#[component]
fn App() -> Element {
    web_sys::console::log_1(&"[ESD] sensor-dashboard: App component mounted".into());

    let mut state = use_context_provider(AppState::new);

    // One-shot load; no retry.
    use_effect(move || {
        spawn(async move {
            let loaded = match js_bridge::fetch_text(DATA_URL).await {
                Ok(body) => state.store.write().load_json(&body),
                Err(e) => Err(e),
            };
            match loaded {
                Ok(count) => {
                    log::info!("[ESD] sensor-dashboard: {} readings ready", count);
                }
                Err(e) => {
                    log::error!("Failed to load sensor readings: {:#}", e);
                    state.error_msg.set(Some(format!("{:#}", e)));
                }
            }
            state.loading.set(false);
        });
    });

    let loading = (state.loading)();
    let error = (state.error_msg)();

    rsx! {
        div {
            style: "font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; padding: 16px 24px;",
            DashboardHeader { title: TITLE.to_string() }
            if loading {
                LoadingSpinner {}
            } else {
                if let Some(message) = error {
                    ErrorDisplay { message: message }
                }
                SensorTable {}
            }
            AddSensorDialog {}
        }
    }
}
