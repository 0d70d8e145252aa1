use dioxus::prelude::*;
use crate::constants::*;

#[component]
pub fn StatusBar(total: u32, logged: usize, has_video: bool) -> Element {
    let status = if has_video { "Counting" } else { "Ready" };
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; height: 22px; padding: 0 14px; background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT}; font-size: 11px; color: {TEXT_DIM};",
            span { "{status}" }
            div {
                style: "display: flex; gap: 16px; font-family: 'SF Mono', Consolas, monospace;",
                span { "total {total}" }
                span { "{logged} timestamps" }
            }
        }
    }
}
