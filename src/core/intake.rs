use mime_guess::mime;
use mime_guess::Mime;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("No file selected")]
    NoFile,
    #[error("Not a video file: {path:?} ({mime})")]
    NotVideo { path: PathBuf, mime: String },
}

/// A picked file whose media type says it is a video.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoFile {
    pub path: PathBuf,
    pub mime: Mime,
}

impl VideoFile {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }
}

/// Media type guessed from the file extension.
pub fn guess_mime(path: &Path) -> Mime {
    mime_guess::from_path(path).first_or_octet_stream()
}

/// Accept `path` only if its media type is `video/*`.
pub fn inspect(path: Option<&Path>) -> Result<VideoFile, IntakeError> {
    let path = path.ok_or(IntakeError::NoFile)?;
    let mime = guess_mime(path);
    if mime.type_() != mime::VIDEO {
        return Err(IntakeError::NotVideo {
            path: path.to_path_buf(),
            mime: mime.to_string(),
        });
    }
    Ok(VideoFile {
        path: path.to_path_buf(),
        mime,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_video_types() {
        for name in ["clip.mp4", "CLIP.MOV", "street.webm", "cam.mkv", "old.avi"] {
            let file = inspect(Some(Path::new(name))).unwrap();
            assert_eq!(file.mime.type_(), mime::VIDEO, "{}", name);
        }
    }

    #[test]
    fn test_rejects_other_types() {
        for name in ["notes.txt", "photo.jpg", "song.mp3", "no_extension"] {
            let err = inspect(Some(Path::new(name))).unwrap_err();
            assert!(matches!(err, IntakeError::NotVideo { .. }), "{}", name);
        }
    }

    #[test]
    fn test_no_file() {
        assert!(matches!(inspect(None), Err(IntakeError::NoFile)));
    }

    #[test]
    fn test_file_name() {
        let file = inspect(Some(Path::new("/videos/corner 1.mp4"))).unwrap();
        assert_eq!(file.file_name(), "corner 1.mp4");
    }
}
