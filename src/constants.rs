//! Shared UI constants: colors and element ids.

pub const BG_DEEPEST: &str = "#09090b";
pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_MARKER: &str = "#f97316";
pub const ACCENT_INCREMENT: &str = "#22c55e";
pub const ACCENT_DECREMENT: &str = "#ef4444";
pub const ACCENT_SAVE: &str = "#3b82f6";

/// Id of the `<video>` element, used by the playback scripts.
pub const VIDEO_ELEMENT_ID: &str = "counter-video";

/// File extensions offered first in the open dialog.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "mov", "webm", "mkv", "avi", "ogv", "mpg", "mpeg"];
