//! Readings table for the current page.

use crate::components::{PaginationBar, TableHeader};
use crate::state::AppState;
use crate::theme::{CELL, MUTED, ROW_STRIPE};
use dioxus::prelude::*;
use esd_store::COLUMNS;

/// Element id of the scrollable table container.
pub const TABLE_SCROLL_ID: &str = "sensor-table-scroll";

/// Renders only the rows of the current page, followed by the pagination bar.
#[component]
pub fn SensorTable() -> Element {
    let state = use_context::<AppState>();
    let view = state.store.read().view();
    let empty_message = if view.query.is_empty() {
        "No sensor readings to show.".to_string()
    } else {
        format!("No sensor readings match \"{}\".", view.query)
    };

    rsx! {
        div {
            id: "{TABLE_SCROLL_ID}",
            style: "max-height: 70vh; overflow: auto; border: 1px solid #eee; border-radius: 4px;",
            table {
                style: "border-collapse: collapse; table-layout: fixed; font-size: 13px; width: max-content;",
                TableHeader {}
                tbody {
                    for (i, reading) in view.page.rows.iter().enumerate() {
                        {
                            let background = if i % 2 == 1 { ROW_STRIPE } else { "white" };
                            rsx! {
                                tr {
                                    key: "{i}",
                                    style: "background: {background};",
                                    for column in COLUMNS.iter() {
                                        {
                                            let id = column.id();
                                            let text = column.cell_text(reading);
                                            let align = if column.numeric { "right" } else { "left" };
                                            rsx! {
                                                td {
                                                    key: "{id}",
                                                    style: "{CELL} max-width: {column.width}px; text-align: {align};",
                                                    title: "{text}",
                                                    "{text}"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if view.page.is_empty() {
                div {
                    style: "padding: 24px; text-align: center; color: {MUTED};",
                    "{empty_message}"
                }
            }
        }
        PaginationBar {}
    }
}
