//! Inline style fragments shared by the dashboard components.

pub const ACCENT: &str = "#ff4942";
pub const ACCENT_LIGHT: &str = "#ff7966";
pub const HEADER_BG: &str = "#fff2f1";
pub const ROW_STRIPE: &str = "#fafafa";
pub const MUTED: &str = "#666";

pub const BUTTON: &str = "padding: 6px 14px; border: none; border-radius: 4px; background: #ff4942; color: white; font-weight: bold; cursor: pointer;";
pub const BUTTON_OUTLINED: &str = "padding: 6px 14px; border: 1px solid #ff4942; border-radius: 4px; background: white; color: #ff4942; font-weight: bold; cursor: pointer;";
pub const CELL: &str = "padding: 6px 10px; border-bottom: 1px solid #eee; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;";
