//! Registry of videos the webview may fetch through the local protocol.
//!
//! A [`VideoSource`] is registered for as long as it is alive; dropping it
//! deregisters it, after which its URL answers 404.

use mime_guess::Mime;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{OnceLock, RwLock};
use uuid::Uuid;

use super::intake::VideoFile;

#[derive(Debug, Clone)]
pub struct RegisteredVideo {
    pub path: PathBuf,
    pub mime: Mime,
}

fn registry() -> &'static RwLock<HashMap<Uuid, RegisteredVideo>> {
    static REGISTRY: OnceLock<RwLock<HashMap<Uuid, RegisteredVideo>>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Look up a live registration.
pub fn lookup(id: Uuid) -> Option<RegisteredVideo> {
    let registry = registry().read().ok()?;
    registry.get(&id).cloned()
}

/// The currently loaded video and its playable URL.
#[derive(Debug)]
pub struct VideoSource {
    id: Uuid,
    file: VideoFile,
}

impl VideoSource {
    pub fn register(file: VideoFile) -> Self {
        let id = Uuid::new_v4();
        match registry().write() {
            Ok(mut registry) => {
                registry.insert(
                    id,
                    RegisteredVideo {
                        path: file.path.clone(),
                        mime: file.mime.clone(),
                    },
                );
            }
            Err(_) => tracing::error!(%id, "Video registry lock poisoned; source will not play"),
        }
        tracing::debug!(%id, path = ?file.path, "Registered video source");
        Self { id, file }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn file(&self) -> &VideoFile {
        &self.file
    }

    pub fn url(&self) -> String {
        crate::utils::video_url(self.id, &self.file.file_name())
    }
}

impl Drop for VideoSource {
    fn drop(&mut self) {
        if let Ok(mut registry) = registry().write() {
            registry.remove(&self.id);
        }
        tracing::debug!(id = %self.id, "Released video source");
    }
}
