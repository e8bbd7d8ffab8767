//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Shows a load failure in place of the table.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #fff2f1; color: #c62828; border-radius: 4px; border: 1px solid #ff7966;",
            strong { "Could not load sensor readings: " }
            "{props.message}"
        }
    }
}
