use dioxus::prelude::*;
use crate::constants::*;

#[component]
pub fn MarkerControls(
    marker_label: Option<String>,
    on_save: EventHandler<MouseEvent>,
    on_clear: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; gap: 8px; margin-bottom: 24px;",
            div {
                style: "display: flex; gap: 8px;",
                button {
                    style: "padding: 8px 16px; background: {ACCENT_SAVE}; border: none; border-radius: 4px; color: white; cursor: pointer; font-size: 13px;",
                    onclick: move |e| on_save.call(e),
                    "Save Timestamp"
                }
                button {
                    style: "padding: 8px 16px; background: {ACCENT_DECREMENT}; border: none; border-radius: 4px; color: white; cursor: pointer; font-size: 13px;",
                    onclick: move |e| on_clear.call(e),
                    "Clear Timestamp"
                }
            }
            if let Some(label) = marker_label {
                div {
                    style: "font-size: 12px; color: {ACCENT_MARKER};",
                    "Current saved marker: {label}"
                }
            }
        }
    }
}
