use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "TransportCounter";
const DATA_DIR_ENV: &str = "COUNTER_DATA_DIR";

/// Directory holding the store and settings files.
///
/// `COUNTER_DATA_DIR` wins; otherwise the platform's per-user data location,
/// falling back to the temp dir.
pub fn app_data_root() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return PathBuf::from(dir);
    }
    let base = std::env::var("LOCALAPPDATA")
        .or_else(|_| std::env::var("APPDATA"))
        .or_else(|_| std::env::var("XDG_DATA_HOME"))
        .map(PathBuf::from)
        .or_else(|_| std::env::var("HOME").map(|home| Path::new(&home).join(".local").join("share")))
        .unwrap_or_else(|_| std::env::temp_dir());
    base.join(APP_DIR_NAME)
}

pub fn storage_path(root: &Path) -> PathBuf {
    root.join("storage.json")
}

pub fn settings_path(root: &Path) -> PathBuf {
    root.join("settings.json")
}

/// The resolved data directory, shared with the UI through context.
#[derive(Debug, Clone, PartialEq)]
pub struct DataDir(pub PathBuf);
