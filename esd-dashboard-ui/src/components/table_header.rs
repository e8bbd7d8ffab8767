//! Column headers; the sortable ones toggle the store's sort on click.

use crate::state::AppState;
use crate::theme::{ACCENT, HEADER_BG};
use dioxus::prelude::*;
use esd_store::{SortKey, COLUMNS};

const ARROW_IDLE: &str = "#d0d0d0";

#[component]
pub fn TableHeader() -> Element {
    let mut state = use_context::<AppState>();
    let sort = state.store.read().sort_state();

    let mut on_sort = move |key: SortKey| {
        let mut store = state.store.write();
        store.sort_by_key(key);
        log::info!(
            "[ESD] table_header: Sorted by {} ({:?})",
            key,
            store.sort_direction()
        );
    };

    rsx! {
        thead {
            tr {
                for column in COLUMNS.iter() {
                    {
                        let id = column.id();
                        let align = if column.numeric { "right" } else { "left" };
                        let base = format!(
                            "position: sticky; top: 0; width: {}px; min-width: {}px; padding: 8px 10px; text-align: {}; background: {}; border-bottom: 2px solid {}; user-select: none;",
                            column.width, column.width, align, HEADER_BG, ACCENT
                        );
                        match (column.sort_key(), column.sort_arrows(sort)) {
                            (Some(key), Some(arrows)) => {
                                let up = if arrows.up { ACCENT } else { ARROW_IDLE };
                                let down = if arrows.down { ACCENT } else { ARROW_IDLE };
                                rsx! {
                                    th {
                                        key: "{id}",
                                        style: "{base} cursor: pointer;",
                                        onclick: move |_| on_sort(key),
                                        "{column.label} "
                                        span { style: "color: {up}; font-size: 10px;", "▲" }
                                        span { style: "color: {down}; font-size: 10px;", "▼" }
                                    }
                                }
                            }
                            _ => rsx! {
                                th {
                                    key: "{id}",
                                    style: "{base}",
                                    "{column.label}"
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
