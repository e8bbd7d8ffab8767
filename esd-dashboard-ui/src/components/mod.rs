//! Reusable Dioxus RSX components for the sensor dashboard.

mod add_sensor_dialog;
mod dashboard_header;
mod error_display;
mod filter_menu;
mod loading_spinner;
mod pagination_bar;
mod search_box;
mod sensor_table;
mod table_header;

pub use add_sensor_dialog::AddSensorDialog;
pub use dashboard_header::DashboardHeader;
pub use error_display::ErrorDisplay;
pub use filter_menu::FilterMenu;
pub use loading_spinner::LoadingSpinner;
pub use pagination_bar::PaginationBar;
pub use search_box::SearchBox;
pub use sensor_table::{SensorTable, TABLE_SCROLL_ID};
pub use table_header::TableHeader;
