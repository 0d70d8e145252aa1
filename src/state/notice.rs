/// A user-facing notification raised by a session operation.
///
/// The UI decides how to present it; the session only reports it.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// The picked file is not a video (or nothing was picked).
    InvalidFile,
    /// A marker was saved at the given time in seconds.
    MarkerSaved(f64),
    MarkerCleared,
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::InvalidFile => "Please upload a valid video file.".to_string(),
            Notice::MarkerSaved(time) => format!("Saved marker at {:.2} seconds.", time),
            Notice::MarkerCleared => "Marker cleared.".to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::InvalidFile)
    }
}
