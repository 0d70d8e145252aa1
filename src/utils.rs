use uuid::Uuid;

use crate::core::protocol::PROTOCOL_NAME;

/// Generates the URL under which the local protocol handler serves a registered video.
///
/// WebView2 on Windows maps custom schemes onto `http://<scheme>.localhost/`;
/// the other webviews use the scheme directly. The trailing file name is only
/// informational; the handler resolves the id.
pub fn video_url(id: Uuid, file_name: &str) -> String {
    format!(
        "{}/video/{}/{}",
        protocol_base(),
        id,
        urlencoding::encode(file_name)
    )
}

#[cfg(target_os = "windows")]
fn protocol_base() -> String {
    format!("http://{}.localhost", PROTOCOL_NAME)
}

#[cfg(not(target_os = "windows"))]
fn protocol_base() -> String {
    format!("{}://localhost", PROTOCOL_NAME)
}

/// Seconds with two decimals, e.g. `12.50s`.
pub fn format_seconds(seconds: f64) -> String {
    format!("{:.2}s", seconds)
}
