//! Dashboard title bar and toolbar.

use crate::components::{FilterMenu, SearchBox};
use crate::state::AppState;
use crate::theme::{ACCENT, BUTTON};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardHeaderProps {
    pub title: String,
}

/// Title plus the filter menu, search box and "Add New Data" button.
#[component]
pub fn DashboardHeader(props: DashboardHeaderProps) -> Element {
    let mut state = use_context::<AppState>();

    let on_add = move |_: Event<MouseData>| {
        state.draft.write().clear();
        state.dialog_open.set(true);
    };

    rsx! {
        div {
            style: "margin-bottom: 12px;",
            h2 {
                style: "margin: 0 0 12px 0; color: {ACCENT};",
                "{props.title}"
            }
            div {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
                FilterMenu {}
                SearchBox {}
                div { style: "flex: 1;" }
                button {
                    style: "{BUTTON}",
                    onclick: on_add,
                    "Add New Data"
                }
            }
        }
    }
}
