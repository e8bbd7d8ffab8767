//! Sensor-type filter menu and active-filter chip.

use crate::components::TABLE_SCROLL_ID;
use crate::js_bridge::scroll_to_top;
use crate::state::AppState;
use crate::theme::{ACCENT, ACCENT_LIGHT, BUTTON_OUTLINED, HEADER_BG};
use dioxus::prelude::*;

const MENU_ITEM: &str = "padding: 6px 12px; cursor: pointer;";

/// "Filter" button with a drop-down of "All" plus every sensor type shown.
#[component]
pub fn FilterMenu() -> Element {
    let mut state = use_context::<AppState>();
    let open = (state.filter_menu_open)();
    let (sensor_types, active) = {
        let store = state.store.read();
        (store.sensor_types(), store.filter_value().to_string())
    };
    let items: Vec<(String, String)> = sensor_types
        .into_iter()
        .map(|sensor_type| {
            let style = if sensor_type == active {
                format!("{MENU_ITEM} background: {HEADER_BG}; font-weight: bold;")
            } else {
                MENU_ITEM.to_string()
            };
            (sensor_type, style)
        })
        .collect();

    // Empty value clears the filter.
    let mut apply = move |value: String| {
        state.store.write().filter_by(&value);
        state.filter_menu_open.set(false);
        scroll_to_top(TABLE_SCROLL_ID);
    };

    let on_toggle = move |_: Event<MouseData>| {
        let open = (state.filter_menu_open)();
        state.filter_menu_open.set(!open);
    };

    rsx! {
        div {
            style: "position: relative; display: flex; gap: 8px; align-items: center;",
            button {
                style: "{BUTTON_OUTLINED}",
                onclick: on_toggle,
                "Filter"
            }
            if open {
                div {
                    style: "position: absolute; top: 100%; left: 0; z-index: 10; min-width: 160px; background: white; border: 1px solid {ACCENT_LIGHT}; border-radius: 4px; box-shadow: 0 2px 8px rgba(0,0,0,0.15);",
                    div {
                        style: "{MENU_ITEM}",
                        onclick: move |_| apply(String::new()),
                        "All"
                    }
                    for (sensor_type, item_style) in items {
                        div {
                            key: "{sensor_type}",
                            style: "{item_style}",
                            onclick: {
                                let value = sensor_type.clone();
                                move |_| apply(value.clone())
                            },
                            "{sensor_type}"
                        }
                    }
                }
            }
            if !active.is_empty() {
                span {
                    style: "display: inline-flex; align-items: center; gap: 6px; padding: 2px 10px; border-radius: 12px; background: {HEADER_BG}; color: {ACCENT}; border: 1px solid {ACCENT_LIGHT};",
                    "{active}"
                    span {
                        style: "cursor: pointer; font-weight: bold;",
                        title: "Clear filter",
                        onclick: move |_| apply(String::new()),
                        "✕"
                    }
                }
            }
        }
    }
}
