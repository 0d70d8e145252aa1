//! UI components.

mod counter_panel;
mod marker_controls;
mod notice_modal;
mod status_bar;
mod title_bar;
mod video_panel;

pub use counter_panel::CounterPanel;
pub use marker_controls::MarkerControls;
pub use notice_modal::NoticeModal;
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
pub use video_panel::VideoPanel;
