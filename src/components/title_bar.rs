use dioxus::prelude::*;
use crate::constants::*;

#[component]
pub fn TitleBar(
    file_name: Option<String>,
    on_open_video: EventHandler<MouseEvent>,
) -> Element {
    let file_label = file_name.unwrap_or_else(|| "No video loaded".to_string());
    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: 40px; padding: 0 16px;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                user-select: none;
            ",
            div {
                style: "display: flex; align-items: center; gap: 20px;",
                span { style: "font-size: 13px; font-weight: 600; color: {TEXT_SECONDARY};", "Transportation Counter" }
                button {
                    class: "collapse-btn",
                    style: "
                        background: {BG_BASE}; border: 1px solid {BORDER_STRONG}; color: {TEXT_PRIMARY};
                        font-size: 12px; cursor: pointer; padding: 4px 10px; border-radius: 4px;
                    ",
                    onclick: move |e| on_open_video.call(e),
                    "Open Video..."
                }
            }
            span {
                style: "font-size: 13px; color: {TEXT_MUTED}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; max-width: 50%;",
                "{file_label}"
            }
        }
    }
}
