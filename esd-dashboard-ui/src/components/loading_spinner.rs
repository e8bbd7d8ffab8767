//! Loading indicator shown while the readings are fetched.

use crate::theme::MUTED;
use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: {MUTED};",
            "Loading sensor readings..."
        }
    }
}
