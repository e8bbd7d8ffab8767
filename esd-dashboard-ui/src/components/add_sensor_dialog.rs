//! Modal form for appending a reading by hand.

use crate::state::AppState;
use crate::theme::{ACCENT, BUTTON, BUTTON_OUTLINED};
use dioxus::prelude::*;
use esd_readings::SensorField;

/// One labelled text input per reading field. Values are appended as typed;
/// nothing is validated, but a completely empty form cannot be submitted.
#[component]
pub fn AddSensorDialog() -> Element {
    let mut state = use_context::<AppState>();
    if !(state.dialog_open)() {
        return rsx! {};
    }
    let (fields, blank): (Vec<(SensorField, String, String)>, bool) = {
        let draft = state.draft.read();
        let fields = SensorField::ALL
            .iter()
            .map(|&field| (field, field.label(), draft.get(field).to_string()))
            .collect();
        (fields, draft.is_blank())
    };
    let submit_style = if blank {
        format!("{BUTTON} opacity: 0.5; cursor: default;")
    } else {
        BUTTON.to_string()
    };

    let mut close = move || {
        state.dialog_open.set(false);
        state.draft.write().clear();
    };

    let on_submit = move |_: Event<MouseData>| {
        let reading = state.draft.read().to_reading();
        log::info!(
            "[ESD] add_sensor_dialog: Appending {} reading for {:?}",
            reading.sensor_type,
            reading.box_id
        );
        state.store.write().append_sensor(reading);
        close();
    };

    rsx! {
        div {
            style: "position: fixed; inset: 0; z-index: 100; display: flex; justify-content: center; align-items: center; background: rgba(0,0,0,0.35);",
            div {
                style: "width: 420px; max-height: 90vh; overflow: auto; padding: 20px 24px; background: white; border-radius: 6px; box-shadow: 0 4px 16px rgba(0,0,0,0.25);",
                h3 {
                    style: "margin: 0 0 16px 0; color: {ACCENT};",
                    "Add New Sensor Data"
                }
                for (field, label, value) in fields {
                    {
                        let input_id = format!("add-sensor-{}", field.key());
                        rsx! {
                            div {
                                key: "{input_id}",
                                style: "margin-bottom: 10px; display: flex; flex-direction: column; gap: 4px;",
                                label {
                                    r#for: "{input_id}",
                                    style: "font-size: 12px; font-weight: bold;",
                                    "{label}"
                                }
                                input {
                                    id: "{input_id}",
                                    r#type: "text",
                                    value: "{value}",
                                    style: "padding: 6px 8px; border: 1px solid #ccc; border-radius: 4px;",
                                    oninput: move |evt: Event<FormData>| {
                                        state.draft.write().set(field, evt.value());
                                    },
                                }
                            }
                        }
                    }
                }
                div {
                    style: "display: flex; justify-content: flex-end; gap: 8px; margin-top: 16px;",
                    button {
                        style: "{BUTTON_OUTLINED}",
                        onclick: move |_| close(),
                        "Cancel"
                    }
                    button {
                        style: "{submit_style}",
                        disabled: blank,
                        onclick: on_submit,
                        "Add Sensor"
                    }
                }
            }
        }
    }
}
