//! Hotkey system
//!
//! Keyboard shortcuts for counting without the mouse.
//!
//! # Bindings
//!
//! - `1`..`4` (row or numpad): count a Bike, E-bike, Vehicle, Pedestrian
//! - `Shift` + `1`..`4`: take one back
//! - `M`: save the marker at the current position
//!
//! Digits are matched on the physical key code, so the binding holds
//! regardless of keyboard layout and of what `Shift` turns the digit into.

use dioxus::prelude::{Code, Key};

use crate::state::Category;

/// All possible actions that can be triggered by hotkeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    Increment(Category),
    Decrement(Category),
    SaveMarker,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// A notice is on screen and must be dismissed first
    pub notice_open: bool,
    /// A video is loaded, so there is a position to mark
    pub has_video: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed by the context
    Suppressed,
}

fn digit_category(code: &Code) -> Option<Category> {
    let index = match code {
        Code::Digit1 | Code::Numpad1 => 0,
        Code::Digit2 | Code::Numpad2 => 1,
        Code::Digit3 | Code::Numpad3 => 2,
        Code::Digit4 | Code::Numpad4 => 3,
        _ => return None,
    };
    Category::from_index(index)
}

/// Maps a key event to an action, considering the current context.
pub fn handle_hotkey(
    key: &Key,
    code: &Code,
    shift: bool,
    ctrl: bool,
    alt: bool,
    meta: bool,
    context: &HotkeyContext,
) -> HotkeyResult {
    // Leave system shortcuts alone.
    if ctrl || alt || meta {
        return HotkeyResult::NoMatch;
    }

    let action = if let Some(category) = digit_category(code) {
        if shift {
            HotkeyAction::Decrement(category)
        } else {
            HotkeyAction::Increment(category)
        }
    } else {
        match key {
            Key::Character(c) if c.eq_ignore_ascii_case("m") => HotkeyAction::SaveMarker,
            _ => return HotkeyResult::NoMatch,
        }
    };

    if context.notice_open {
        return HotkeyResult::Suppressed;
    }
    if action == HotkeyAction::SaveMarker && !context.has_video {
        return HotkeyResult::Suppressed;
    }
    HotkeyResult::Action(action)
}
