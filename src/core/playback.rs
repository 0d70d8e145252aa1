//! Talks to the `<video>` element inside the webview.

use dioxus::prelude::document;
use std::time::Duration;

use crate::constants::VIDEO_ELEMENT_ID;

/// Current playback time reported by the video element.
///
/// `None` when there is no element, it reports garbage, or the webview does
/// not answer within `timeout`.
pub async fn read_position(timeout: Duration) -> Option<f64> {
    let script = format!(
        r#"
        const video = document.getElementById("{VIDEO_ELEMENT_ID}");
        return video ? video.currentTime : null;
        "#
    );
    let eval = document::eval(&script);
    match tokio::time::timeout(timeout, eval.join::<Option<f64>>()).await {
        Ok(Ok(position)) => position.filter(|time| time.is_finite()),
        Ok(Err(err)) => {
            tracing::warn!(error = ?err, "Failed to read playback position");
            None
        }
        Err(_) => {
            tracing::warn!(timeout_ms = timeout.as_millis() as u64, "Playback position read timed out");
            None
        }
    }
}

/// Move the video element's playhead.
pub fn seek_to(seconds: f64) {
    let script = format!(
        r#"
        const video = document.getElementById("{VIDEO_ELEMENT_ID}");
        if (video) {{ video.currentTime = {seconds}; }}
        "#
    );
    let _ = document::eval(&script);
}
