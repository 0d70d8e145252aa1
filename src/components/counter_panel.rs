use dioxus::prelude::*;
use crate::constants::*;
use crate::state::{Category, Tally};
use crate::utils::format_seconds;

#[component]
pub fn CounterPanel(
    tally: Tally,
    on_increment: EventHandler<Category>,
    on_decrement: EventHandler<Category>,
    on_reset: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center;",
            div {
                style: "display: grid; grid-template-columns: repeat(2, minmax(140px, 1fr)); gap: 24px;",
                for category in Category::ALL {
                    CounterCard {
                        key: "{category.index()}",
                        category,
                        count: tally.count(category),
                        latest: tally.latest(category),
                        on_increment,
                        on_decrement,
                    }
                }
            }
            button {
                style: "
                    margin-top: 24px; padding: 10px 24px;
                    background-color: {BG_ELEVATED}; border: 1px solid {BORDER_STRONG};
                    border-radius: 4px; color: {TEXT_PRIMARY}; font-size: 13px; cursor: pointer;
                ",
                onclick: move |e| on_reset.call(e),
                "Reset All Counts"
            }
        }
    }
}

#[component]
fn CounterCard(
    category: Category,
    count: u32,
    latest: Option<f64>,
    on_increment: EventHandler<Category>,
    on_decrement: EventHandler<Category>,
) -> Element {
    let hotkey = category.index() + 1;
    let latest_label = latest
        .map(|time| format!("last at {}", format_seconds(time)))
        .unwrap_or_else(|| "\u{00a0}".to_string());
    rsx! {
        div {
            style: "
                display: flex; flex-direction: column; align-items: center; gap: 8px;
                padding: 12px; background-color: {BG_SURFACE};
                border: 1px solid {BORDER_SUBTLE}; border-radius: 6px;
            ",
            div {
                style: "display: flex; gap: 8px;",
                button {
                    title: "{hotkey}",
                    style: "width: 56px; padding: 8px 0; background: {ACCENT_INCREMENT}; border: none; border-radius: 4px; color: white; font-size: 16px; cursor: pointer;",
                    onclick: move |_| on_increment.call(category),
                    "+"
                }
                button {
                    title: "Shift+{hotkey}",
                    style: "width: 56px; padding: 8px 0; background: {ACCENT_DECREMENT}; border: none; border-radius: 4px; color: white; font-size: 16px; cursor: pointer;",
                    onclick: move |_| on_decrement.call(category),
                    "-"
                }
            }
            div {
                style: "font-size: 14px; font-weight: 600; color: {TEXT_PRIMARY};",
                "{category.label()}: {count}"
            }
            div {
                style: "font-size: 11px; color: {TEXT_MUTED}; font-family: 'SF Mono', Consolas, monospace;",
                "{latest_label}"
            }
        }
    }
}
