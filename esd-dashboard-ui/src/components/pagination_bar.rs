//! "X-Y of Z" range with previous/next and page buttons.

use crate::components::TABLE_SCROLL_ID;
use crate::js_bridge::scroll_to_top;
use crate::state::AppState;
use crate::theme::{ACCENT, MUTED};
use dioxus::prelude::*;
use esd_store::{page_items, PageItem};

const PAGE_BUTTON: &str = "min-width: 32px; padding: 4px 8px; border: 1px solid #ddd; border-radius: 4px; background: white; cursor: pointer;";

#[component]
pub fn PaginationBar() -> Element {
    let mut state = use_context::<AppState>();
    let view = state.store.read().view();
    let page = &view.page;
    let current = page.page_index;
    let range = page.range.to_string();
    let has_previous = page.has_previous();
    let has_next = page.has_next();
    let items = page_items(current, page.page_count);

    let mut go_to = move |index: usize| {
        state.store.write().paginate(index);
        scroll_to_top(TABLE_SCROLL_ID);
    };

    rsx! {
        div {
            style: "display: flex; justify-content: flex-end; align-items: center; gap: 6px; padding: 8px 0; font-size: 13px;",
            span {
                style: "margin-right: 12px; color: {MUTED};",
                "{range}"
            }
            button {
                style: "{PAGE_BUTTON}",
                disabled: !has_previous,
                onclick: move |_| go_to(current.saturating_sub(1)),
                "‹"
            }
            for (slot, item) in items.into_iter().enumerate() {
                {
                    match item {
                        PageItem::Page(index) => {
                            let number = index + 1;
                            let style = if index == current {
                                format!("{PAGE_BUTTON} background: {ACCENT}; color: white; border-color: {ACCENT};")
                            } else {
                                PAGE_BUTTON.to_string()
                            };
                            rsx! {
                                button {
                                    key: "{slot}",
                                    style: "{style}",
                                    onclick: move |_| go_to(index),
                                    "{number}"
                                }
                            }
                        }
                        PageItem::Gap => rsx! {
                            span { key: "{slot}", style: "color: {MUTED};", "…" }
                        },
                    }
                }
            }
            button {
                style: "{PAGE_BUTTON}",
                disabled: !has_next,
                onclick: move |_| go_to(current + 1),
                "›"
            }
        }
    }
}
