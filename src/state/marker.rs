use serde::{Deserialize, Serialize};

/// The saved playback position used as the seek point for the next load.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Marker {
    /// Time position in seconds
    pub time: f64,
}

impl Marker {
    pub fn new(time: f64) -> Self {
        Self { time }
    }

    /// Parse the stored string form. Anything that is not a finite number is no marker.
    pub fn parse(value: &str) -> Option<Self> {
        let time = value.trim().parse::<f64>().ok()?;
        time.is_finite().then_some(Self { time })
    }

    /// String form written to storage. Round-trips through [`Marker::parse`].
    pub fn encode(&self) -> String {
        self.time.to_string()
    }

    /// Two-decimal label used in the UI and notices.
    pub fn display(&self) -> String {
        format!("{:.2}", self.time)
    }
}
