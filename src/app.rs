//! Root application component
//!
//! Owns the counting session and wires the video surface, counters, marker
//! controls and notices together.

use dioxus::prelude::*;
use std::path::PathBuf;

use crate::components::{CounterPanel, MarkerControls, NoticeModal, StatusBar, TitleBar, VideoPanel};
use crate::config::AppConfig;
use crate::constants::*;
use crate::core::paths::{storage_path, DataDir};
use crate::core::playback;
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{run_session_ops, CounterSession, Notice, SessionOp};
use crate::storage::{FileStore, Repository};

fn open_session(data_dir: &DataDir, config: &AppConfig) -> CounterSession<FileStore> {
    let path = storage_path(&data_dir.0);
    let store = FileStore::open(&path).unwrap_or_else(|err| {
        tracing::error!(error = %err, "Could not open store; starting empty");
        FileStore::empty(&path)
    });
    CounterSession::open(Repository::new(store), config)
}

fn pick_video() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Video", VIDEO_EXTENSIONS)
        .add_filter("All Files", &["*"])
        .set_title("Open Video")
        .pick_file()
}

/// Main application component
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let data_dir = use_context::<DataDir>();
    let position_timeout = config.position_timeout();

    let mut session = use_signal(move || open_session(&data_dir, &config));
    let mut notice = use_signal(|| None::<Notice>);

    // Position reads go through the webview, so actions are queued and
    // applied strictly in the order they were made.
    let ops = use_coroutine(move |rx: UnboundedReceiver<SessionOp>| async move {
        run_session_ops(
            rx,
            move || async move {
                if session.read().has_video() {
                    playback::read_position(position_timeout).await
                } else {
                    None
                }
            },
            move |op, reported| {
                let raised = session.write().apply(op, reported);
                if let Some(raised) = raised {
                    notice.set(Some(raised));
                }
            },
        )
        .await;
    });

    let session_read = session.read();
    let has_video = session_read.has_video();
    let file_name = session_read.video().map(|source| source.file().file_name());
    let video_url = session_read.video().map(|source| source.url());
    let marker_label = session_read.marker().map(|marker| format!("{}s", marker.display()));
    let tally = session_read.tally().clone();
    drop(session_read);

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column; width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                outline: none; overflow: hidden;
            ",
            // Enable keyboard focus on this container for hotkeys
            tabindex: "0",
            onkeydown: move |e: KeyboardEvent| {
                if notice.read().is_some() && matches!(e.key(), Key::Enter | Key::Escape) {
                    e.prevent_default();
                    notice.set(None);
                    return;
                }

                let hotkey_context = HotkeyContext {
                    notice_open: notice.read().is_some(),
                    has_video: session.read().has_video(),
                };
                let modifiers = e.modifiers();
                match handle_hotkey(
                    &e.key(),
                    &e.code(),
                    modifiers.shift(),
                    modifiers.ctrl(),
                    modifiers.alt(),
                    modifiers.meta(),
                    &hotkey_context,
                ) {
                    HotkeyResult::Action(action) => {
                        e.prevent_default();
                        match action {
                            HotkeyAction::Increment(category) => ops.send(SessionOp::Increment(category)),
                            HotkeyAction::Decrement(category) => ops.send(SessionOp::Decrement(category)),
                            HotkeyAction::SaveMarker => ops.send(SessionOp::SaveMarker),
                        }
                    }
                    HotkeyResult::NoMatch | HotkeyResult::Suppressed => {}
                }
            },

            TitleBar {
                file_name,
                on_open_video: move |_| {
                    // Cancelling the dialog leaves everything as it is.
                    let Some(path) = pick_video() else {
                        return;
                    };
                    if let Err(rejected) = session.write().load_file(Some(path.as_path())) {
                        notice.set(Some(rejected));
                    }
                },
            }

            div {
                style: "display: flex; flex: 1; min-height: 0;",
                VideoPanel {
                    video_url,
                    on_metadata_loaded: move |_| {
                        let target = session.write().on_metadata_loaded();
                        if let Some(seconds) = target {
                            playback::seek_to(seconds);
                        }
                    },
                }
                div {
                    style: "
                        width: 50%; display: flex; flex-direction: column; align-items: center;
                        padding: 24px 16px; overflow-y: auto;
                        background-color: {BG_BASE}; border-left: 1px solid {BORDER_SUBTLE};
                    ",
                    if has_video {
                        MarkerControls {
                            marker_label,
                            on_save: move |_| ops.send(SessionOp::SaveMarker),
                            on_clear: move |_| ops.send(SessionOp::ClearMarker),
                        }
                    }
                    CounterPanel {
                        tally: tally.clone(),
                        on_increment: move |category| ops.send(SessionOp::Increment(category)),
                        on_decrement: move |category| ops.send(SessionOp::Decrement(category)),
                        on_reset: move |_| ops.send(SessionOp::ResetAll),
                    }
                    div {
                        style: "margin-top: 16px; font-size: 11px; color: {TEXT_DIM};",
                        "Keys 1-4 count, Shift+1-4 undo, M saves the marker"
                    }
                }
            }

            StatusBar {
                total: tally.total(),
                logged: tally.logged_total(),
                has_video,
            }

            if let Some(current) = notice() {
                NoticeModal {
                    notice: current,
                    on_dismiss: move |_| notice.set(None),
                }
            }
        }
    }
}
