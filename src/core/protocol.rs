//! Local protocol handler that streams registered videos to the webview.
//!
//! Requests look like `/video/<id>/<file name>`. Byte ranges are honored so
//! the video element can seek without loading the whole file.

use http::header::{ACCEPT_RANGES, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_LENGTH, CONTENT_RANGE, CONTENT_TYPE, RANGE};
use http::{Request, Response, StatusCode};
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use uuid::Uuid;

use super::video_source;

pub const PROTOCOL_NAME: &str = "counter";

/// Largest body returned for an open-ended range.
const MAX_CHUNK_BYTES: u64 = 4 * 1024 * 1024;

/// An inclusive byte range within a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }
}

/// Resolve a `Range` header against a file of `file_len` bytes.
///
/// Only single `bytes=` ranges are supported. Every range is capped at
/// `max_chunk` bytes from its start; the caller reports the shorter span in
/// `Content-Range`. `None` means the range cannot be satisfied.
pub fn parse_range(header: &str, file_len: u64, max_chunk: u64) -> Option<ByteRange> {
    if file_len == 0 {
        return None;
    }
    let ranges = header.trim().strip_prefix("bytes=")?;
    if ranges.contains(',') {
        return None;
    }
    let (start, end) = ranges.split_once('-')?;
    let (start, end) = (start.trim(), end.trim());
    let last = file_len - 1;

    let (start, end) = if start.is_empty() {
        // Suffix range: the last N bytes.
        let suffix = end.parse::<u64>().ok()?;
        if suffix == 0 {
            return None;
        }
        (file_len.saturating_sub(suffix), last)
    } else {
        let start = start.parse::<u64>().ok()?;
        if start > last {
            return None;
        }
        let end = if end.is_empty() {
            last
        } else {
            let end = end.parse::<u64>().ok()?;
            if end < start {
                return None;
            }
            end.min(last)
        };
        (start, end)
    };
    Some(ByteRange {
        start,
        end: end.min(start.saturating_add(max_chunk.max(1) - 1)),
    })
}

/// Answer one request from the webview.
pub fn handle_request(request: &Request<Vec<u8>>) -> Response<Cow<'static, [u8]>> {
    let path = request.uri().path();
    let Some(id) = video_id_from_path(path) else {
        return empty(StatusCode::NOT_FOUND);
    };
    let Some(video) = video_source::lookup(id) else {
        tracing::debug!(%id, "Request for unknown or released video");
        return empty(StatusCode::NOT_FOUND);
    };
    let range_header = request
        .headers()
        .get(RANGE)
        .and_then(|value| value.to_str().ok());

    match serve_file(&video.path, video.mime.essence_str(), range_header, MAX_CHUNK_BYTES) {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(path = ?video.path, error = %err, "Failed to serve video");
            empty(StatusCode::NOT_FOUND)
        }
    }
}

fn video_id_from_path(path: &str) -> Option<Uuid> {
    let mut segments = path.trim_start_matches('/').split('/');
    if segments.next()? != "video" {
        return None;
    }
    Uuid::parse_str(segments.next()?).ok()
}

/// Without a `Range` header the whole file is sent with `200 OK`; media
/// elements always ask for ranges, so only small fetches take that path.
fn serve_file(
    path: &Path,
    content_type: &str,
    range_header: Option<&str>,
    max_chunk: u64,
) -> io::Result<Response<Cow<'static, [u8]>>> {
    let mut file = File::open(path)?;
    let file_len = file.metadata()?.len();

    let (status, range) = match range_header {
        Some(header) => match parse_range(header, file_len, max_chunk) {
            Some(range) => (StatusCode::PARTIAL_CONTENT, range),
            None => {
                return Ok(Response::builder()
                    .status(StatusCode::RANGE_NOT_SATISFIABLE)
                    .header(CONTENT_RANGE, format!("bytes */{}", file_len))
                    .body(Cow::Borrowed(&[][..]))
                    .unwrap_or_else(|_| empty(StatusCode::INTERNAL_SERVER_ERROR)));
            }
        },
        None if file_len == 0 => return Ok(empty(StatusCode::OK)),
        None => (
            StatusCode::OK,
            ByteRange {
                start: 0,
                end: file_len - 1,
            },
        ),
    };

    file.seek(SeekFrom::Start(range.start))?;
    let mut body = Vec::with_capacity(range.len() as usize);
    file.take(range.len()).read_to_end(&mut body)?;

    let mut builder = Response::builder()
        .status(status)
        .header(CONTENT_TYPE, content_type)
        .header(ACCEPT_RANGES, "bytes")
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(CONTENT_LENGTH, body.len().to_string());
    if status == StatusCode::PARTIAL_CONTENT {
        builder = builder.header(
            CONTENT_RANGE,
            format!("bytes {}-{}/{}", range.start, range.end, file_len),
        );
    }
    builder
        .body(Cow::Owned(body))
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))
}

fn empty(status: StatusCode) -> Response<Cow<'static, [u8]>> {
    let mut response = Response::new(Cow::Borrowed(&[][..]));
    *response.status_mut() = status;
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::intake::inspect;
    use crate::core::video_source::VideoSource;
    use std::fs;

    fn temp_video(bytes: &[u8]) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("transport-counter-test-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("clip.mp4");
        fs::write(&path, bytes).unwrap();
        path
    }

    fn get(uri: &str, range: Option<&str>) -> Response<Cow<'static, [u8]>> {
        let mut builder = Request::builder().uri(uri);
        if let Some(range) = range {
            builder = builder.header(RANGE, range);
        }
        handle_request(&builder.body(Vec::new()).unwrap())
    }

    fn source_path(source: &VideoSource) -> String {
        format!("counter://localhost/video/{}/clip.mp4", source.id())
    }

    #[test]
    fn test_parse_range_forms() {
        assert_eq!(parse_range("bytes=0-99", 1000, 64), Some(ByteRange { start: 0, end: 99 }));
        assert_eq!(parse_range("bytes=100-", 1000, 64), Some(ByteRange { start: 100, end: 163 }));
        assert_eq!(parse_range("bytes=990-", 1000, 64), Some(ByteRange { start: 990, end: 999 }));
        assert_eq!(parse_range("bytes=-10", 1000, 64), Some(ByteRange { start: 990, end: 999 }));
        assert_eq!(parse_range("bytes=-50", 1000, 64), Some(ByteRange { start: 950, end: 999 }));
        assert_eq!(parse_range("bytes=980-5000", 1000, 64), Some(ByteRange { start: 980, end: 999 }));
    }

    #[test]
    fn test_parse_range_caps_to_chunk() {
        assert_eq!(parse_range("bytes=500-5000", 1000, 64), Some(ByteRange { start: 500, end: 563 }));

        let file_len = 10_000_000_000;
        let range = parse_range("bytes=0-9999999999", file_len, MAX_CHUNK_BYTES).unwrap();
        assert_eq!(range.len(), MAX_CHUNK_BYTES);
        let range = parse_range("bytes=0-", file_len, MAX_CHUNK_BYTES).unwrap();
        assert_eq!(range.len(), MAX_CHUNK_BYTES);

        assert_eq!(parse_range("bytes=-5000", 1000, 64), Some(ByteRange { start: 0, end: 63 }));
        let range = parse_range("bytes=-9999999999", file_len, MAX_CHUNK_BYTES).unwrap();
        assert_eq!(range.start, 1);
        assert_eq!(range.len(), MAX_CHUNK_BYTES);
    }

    #[test]
    fn test_parse_range_unsatisfiable() {
        assert_eq!(parse_range("bytes=1000-", 1000, 64), None);
        assert_eq!(parse_range("bytes=20-10", 1000, 64), None);
        assert_eq!(parse_range("bytes=-0", 1000, 64), None);
        assert_eq!(parse_range("bytes=0-1,5-6", 1000, 64), None);
        assert_eq!(parse_range("items=0-1", 1000, 64), None);
        assert_eq!(parse_range("bytes=0-", 0, 64), None);
    }

    #[test]
    fn test_serves_requested_range() {
        let path = temp_video(b"0123456789");
        let source = VideoSource::register(inspect(Some(path.as_path())).unwrap());

        let response = get(&source_path(&source), Some("bytes=2-5"));
        assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
        assert_eq!(&response.body()[..], b"2345");
        assert_eq!(response.headers()[CONTENT_RANGE], "bytes 2-5/10");
        assert_eq!(response.headers()[CONTENT_TYPE], "video/mp4");

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_serves_whole_small_file_without_range() {
        let path = temp_video(b"abc");
        let source = VideoSource::register(inspect(Some(path.as_path())).unwrap());

        let response = get(&source_path(&source), None);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(&response.body()[..], b"abc");

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_explicit_range_gets_short_reply() {
        let path = temp_video(b"0123456789");

        let response = serve_file(&path, "video/mp4", Some("bytes=0-9"), 4).unwrap();
        assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
        assert_eq!(&response.body()[..], b"0123");
        assert_eq!(response.headers()[CONTENT_RANGE], "bytes 0-3/10");
        assert_eq!(response.headers()[CONTENT_LENGTH], "4");

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_no_range_is_full_ok_even_past_chunk_size() {
        let path = temp_video(b"0123456789");

        let response = serve_file(&path, "video/mp4", None, 4).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(&response.body()[..], b"0123456789");
        assert_eq!(response.headers()[CONTENT_LENGTH], "10");
        assert!(response.headers().get(CONTENT_RANGE).is_none());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_unsatisfiable_range() {
        let path = temp_video(b"abc");
        let source = VideoSource::register(inspect(Some(path.as_path())).unwrap());

        let response = get(&source_path(&source), Some("bytes=10-"));
        assert_eq!(response.status(), StatusCode::RANGE_NOT_SATISFIABLE);
        assert_eq!(response.headers()[CONTENT_RANGE], "bytes */3");

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_released_source_is_not_served() {
        let path = temp_video(b"abc");
        let source = VideoSource::register(inspect(Some(path.as_path())).unwrap());
        let uri = source_path(&source);
        drop(source);

        assert_eq!(get(&uri, None).status(), StatusCode::NOT_FOUND);
        assert_eq!(get("counter://localhost/other", None).status(), StatusCode::NOT_FOUND);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
