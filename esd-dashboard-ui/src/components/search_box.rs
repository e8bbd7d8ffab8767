//! Free-text search over sensor type and name.

use crate::components::TABLE_SCROLL_ID;
use crate::js_bridge::scroll_to_top;
use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn SearchBox() -> Element {
    let mut state = use_context::<AppState>();
    let query = state.store.read().query().to_string();

    let on_input = move |evt: Event<FormData>| {
        let value = evt.value();
        let matches = state.store.write().search(&value).len();
        log::debug!("[ESD] search_box: {:?} matched {} readings", value, matches);
        scroll_to_top(TABLE_SCROLL_ID);
    };

    rsx! {
        input {
            r#type: "search",
            placeholder: "Search sensor type or name",
            value: "{query}",
            style: "padding: 6px 10px; border: 1px solid #ccc; border-radius: 4px; min-width: 240px;",
            oninput: on_input,
        }
    }
}
