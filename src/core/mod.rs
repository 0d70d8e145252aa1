pub mod intake;
pub mod paths;
pub mod playback;
pub mod protocol;
pub mod video_source;
