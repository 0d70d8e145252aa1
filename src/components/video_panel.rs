use dioxus::prelude::*;
use crate::constants::*;

/// The playback surface. Renders a native `<video>` once a source is loaded.
#[component]
pub fn VideoPanel(
    video_url: Option<String>,
    on_metadata_loaded: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            style: "flex: 1; display: flex; align-items: flex-start; justify-content: center; min-width: 0; min-height: 0; padding: 16px; background-color: {BG_DEEPEST};",
            if let Some(url) = video_url {
                video {
                    // A fresh element per source, so metadata fires for every load.
                    key: "{url}",
                    id: VIDEO_ELEMENT_ID,
                    src: "{url}",
                    controls: true,
                    preload: "metadata",
                    style: "max-width: 100%; max-height: 100%; border-radius: 4px; object-fit: contain; background-color: #000;",
                    onloadedmetadata: move |_| on_metadata_loaded.call(()),
                }
            } else {
                div {
                    style: "align-self: center; display: flex; flex-direction: column; align-items: center; gap: 12px; color: {TEXT_DIM};",
                    div {
                        style: "width: 48px; height: 48px; border: 1px solid {BORDER_DEFAULT}; border-radius: 50%; display: flex; align-items: center; justify-content: center; font-size: 14px;",
                        "?"
                    }
                    span { style: "font-size: 12px;", "Open a video to start counting" }
                }
            }
        }
    }
}
