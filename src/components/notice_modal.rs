use dioxus::prelude::*;

use crate::constants::*;
use crate::state::Notice;

/// Modal overlay for a [`Notice`]; blocks the rest of the window until dismissed.
#[component]
pub fn NoticeModal(
    notice: Notice,
    on_dismiss: EventHandler<()>,
) -> Element {
    let accent = if notice.is_error() { ACCENT_DECREMENT } else { ACCENT_SAVE };
    let message = notice.message();
    rsx! {
        div {
            style: "
                position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                background-color: rgba(0, 0, 0, 0.5);
                display: flex; align-items: center; justify-content: center;
                z-index: 2000;
            ",
            div {
                style: "
                    width: 360px; background-color: {BG_ELEVATED};
                    border: 1px solid {BORDER_DEFAULT}; border-top: 3px solid {accent}; border-radius: 8px;
                    padding: 24px; box-shadow: 0 10px 25px rgba(0,0,0,0.5);
                ",
                onclick: move |e| e.stop_propagation(),
                p { style: "margin: 0 0 20px 0; font-size: 14px; color: {TEXT_PRIMARY};", "{message}" }
                button {
                    style: "width: 100%; padding: 10px; background: {accent}; border: none; border-radius: 4px; color: white; cursor: pointer;",
                    onmounted: move |e| async move {
                        let _ = e.set_focus(true).await;
                    },
                    onclick: move |_| on_dismiss.call(()),
                    "OK"
                }
            }
        }
    }
}
