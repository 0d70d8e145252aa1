//! The counting session: everything a single window owns.
//!
//! Every operation is synchronous. Counter changes are mirrored to the store
//! before the call returns; the playback position is passed in by the caller.

use std::path::Path;

use super::{Category, DecrementPolicy, Marker, Notice, Tally};
use crate::config::AppConfig;
use crate::core::intake;
use crate::core::video_source::VideoSource;
use crate::storage::{KeyValueStore, Repository};

pub struct CounterSession<S> {
    repo: Repository<S>,
    tally: Tally,
    marker: Option<Marker>,
    source: Option<VideoSource>,
    seek_pending: bool,
    start_time: f64,
    decrement_policy: DecrementPolicy,
}

impl<S: KeyValueStore> CounterSession<S> {
    /// Seed the session from the store.
    pub fn open(repo: Repository<S>, config: &AppConfig) -> Self {
        let tally = repo.load_tally();
        let marker = repo.load_marker();
        tracing::info!(
            counts = ?tally.counts(),
            marker = ?marker.map(|m| m.time),
            "Restored counter state"
        );
        Self {
            repo,
            tally,
            marker,
            source: None,
            seek_pending: false,
            start_time: config.start_time_seconds,
            decrement_policy: config.decrement_policy,
        }
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn marker(&self) -> Option<Marker> {
        self.marker
    }

    pub fn video(&self) -> Option<&VideoSource> {
        self.source.as_ref()
    }

    pub fn has_video(&self) -> bool {
        self.source.is_some()
    }

    /// Make the picked file the active video. The previous source is released.
    ///
    /// A missing or non-video file leaves the session untouched.
    pub fn load_file(&mut self, path: Option<&Path>) -> Result<(), Notice> {
        let file = intake::inspect(path).map_err(|err| {
            tracing::warn!(error = %err, "Rejected file");
            Notice::InvalidFile
        })?;
        let source = VideoSource::register(file);
        tracing::info!(
            id = %source.id(),
            path = ?source.file().path,
            mime = %source.file().mime,
            "Loading video"
        );
        self.source = Some(source);
        self.seek_pending = true;
        Ok(())
    }

    /// Where to seek once the video element knows its metadata.
    ///
    /// Returns a target only for the first call after each load.
    pub fn on_metadata_loaded(&mut self) -> Option<f64> {
        if !self.seek_pending || self.source.is_none() {
            return None;
        }
        self.seek_pending = false;
        let target = self.marker.map(|marker| marker.time).unwrap_or(self.start_time);
        tracing::debug!(seek_to = target, "Seeking after metadata load");
        Some(target)
    }

    /// The position to record: what the surface reported, or 0 without a surface.
    pub fn current_position(&self, reported: Option<f64>) -> f64 {
        if self.source.is_none() {
            return 0.0;
        }
        reported.filter(|time| time.is_finite()).unwrap_or(0.0)
    }

    pub fn increment(&mut self, category: Category, position: f64) {
        self.tally.increment(category, position);
        tracing::debug!(category = category.label(), position, "Increment");
        self.persist_tally();
    }

    pub fn decrement(&mut self, category: Category) {
        if self.tally.decrement(category, self.decrement_policy) {
            tracing::debug!(category = category.label(), "Decrement");
            self.persist_tally();
        }
    }

    pub fn reset_all(&mut self) {
        self.tally.reset();
        tracing::info!("Reset all counts");
        self.persist_tally();
    }

    pub fn save_marker(&mut self, position: f64) -> Notice {
        let marker = Marker::new(position);
        if let Err(err) = self.repo.save_marker(marker) {
            tracing::error!(error = %err, "Failed to persist marker");
        }
        self.marker = Some(marker);
        tracing::info!(time = position, "Saved marker");
        Notice::MarkerSaved(position)
    }

    pub fn clear_marker(&mut self) -> Notice {
        if let Err(err) = self.repo.clear_marker() {
            tracing::error!(error = %err, "Failed to remove marker");
        }
        self.marker = None;
        tracing::info!("Cleared marker");
        Notice::MarkerCleared
    }

    #[cfg(test)]
    pub fn into_repository(self) -> Repository<S> {
        self.repo
    }

    fn persist_tally(&mut self) {
        if let Err(err) = self.repo.save_tally(&self.tally) {
            tracing::error!(error = %err, "Failed to persist counts");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::video_source;
    use crate::storage::MemoryStore;

    fn session() -> CounterSession<MemoryStore> {
        CounterSession::open(Repository::new(MemoryStore::default()), &AppConfig::default())
    }

    fn reopen(session: CounterSession<MemoryStore>) -> CounterSession<MemoryStore> {
        CounterSession::open(session.into_repository(), &AppConfig::default())
    }

    #[test]
    fn test_increment_at_position() {
        let mut session = session();
        session.load_file(Some(Path::new("street.mp4"))).unwrap();
        let position = session.current_position(Some(12.5));
        session.increment(Category::Vehicle, position);
        assert_eq!(session.tally().counts(), [0, 0, 1, 0]);
        assert_eq!(session.tally().timestamps(Category::Vehicle), &[12.5]);
    }

    #[test]
    fn test_position_is_zero_without_video() {
        let session = session();
        assert_eq!(session.current_position(Some(8.0)), 0.0);

        let mut session = session;
        session.load_file(Some(Path::new("street.mp4"))).unwrap();
        assert_eq!(session.current_position(None), 0.0);
        assert_eq!(session.current_position(Some(f64::NAN)), 0.0);
        assert_eq!(session.current_position(Some(8.0)), 8.0);
    }

    #[test]
    fn test_counts_survive_reload() {
        let mut session = session();
        session.increment(Category::Bike, 0.0);
        session.increment(Category::Bike, 1.5);
        session.increment(Category::Pedestrian, 2.0);
        session.decrement(Category::Bike);
        let expected = session.tally().clone();

        let session = reopen(session);
        assert_eq!(session.tally(), &expected);
        assert_eq!(session.tally().counts(), [1, 0, 0, 1]);
        assert_eq!(session.tally().timestamps(Category::Bike), &[0.0, 1.5]);
    }

    #[test]
    fn test_decrement_never_negative() {
        let mut session = session();
        for category in Category::ALL {
            for _ in 0..3 {
                session.decrement(category);
            }
        }
        assert_eq!(session.tally().counts(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_decrement_policy_from_config() {
        let config = AppConfig {
            decrement_policy: DecrementPolicy::PopLatest,
            ..Default::default()
        };
        let mut session = CounterSession::open(Repository::new(MemoryStore::default()), &config);
        session.increment(Category::EBike, 4.0);
        session.increment(Category::EBike, 6.0);
        session.decrement(Category::EBike);
        assert_eq!(session.tally().timestamps(Category::EBike), &[4.0]);
    }

    #[test]
    fn test_reset_all_persists() {
        let mut session = session();
        session.increment(Category::Vehicle, 3.0);
        session.increment(Category::EBike, 4.0);
        session.reset_all();
        assert_eq!(session.tally(), &Tally::default());

        let session = reopen(session);
        assert_eq!(session.tally(), &Tally::default());
    }

    #[test]
    fn test_marker_survives_reload() {
        let mut session = session();
        session.load_file(Some(Path::new("street.mp4"))).unwrap();
        assert_eq!(session.save_marker(42.75), Notice::MarkerSaved(42.75));

        let mut session = reopen(session);
        assert_eq!(session.marker(), Some(Marker::new(42.75)));

        assert_eq!(session.clear_marker(), Notice::MarkerCleared);
        assert_eq!(session.marker(), None);
        let session = reopen(session);
        assert_eq!(session.marker(), None);
    }

    #[test]
    fn test_metadata_seeks_to_start_without_marker() {
        let mut session = session();
        session.load_file(Some(Path::new("street.mp4"))).unwrap();
        assert_eq!(session.on_metadata_loaded(), Some(0.0));
    }

    #[test]
    fn test_metadata_seeks_to_marker_once_per_load() {
        let mut session = session();
        session.save_marker(30.0);
        assert_eq!(session.on_metadata_loaded(), None);

        session.load_file(Some(Path::new("street.mp4"))).unwrap();
        assert_eq!(session.on_metadata_loaded(), Some(30.0));
        assert_eq!(session.on_metadata_loaded(), None);

        session.load_file(Some(Path::new("other.webm"))).unwrap();
        assert_eq!(session.on_metadata_loaded(), Some(30.0));
    }

    #[test]
    fn test_configured_start_time() {
        let config = AppConfig {
            start_time_seconds: 5.0,
            ..Default::default()
        };
        let mut session = CounterSession::open(Repository::new(MemoryStore::default()), &config);
        session.load_file(Some(Path::new("street.mp4"))).unwrap();
        assert_eq!(session.on_metadata_loaded(), Some(5.0));
    }

    #[test]
    fn test_rejected_file_changes_nothing() {
        let mut session = session();
        session.load_file(Some(Path::new("street.mp4"))).unwrap();
        session.increment(Category::Bike, 1.0);
        session.save_marker(2.0);
        let source_id = session.video().map(|source| source.id());
        let tally = session.tally().clone();

        assert_eq!(session.load_file(Some(Path::new("notes.txt"))), Err(Notice::InvalidFile));
        assert_eq!(session.load_file(None), Err(Notice::InvalidFile));

        assert_eq!(session.video().map(|source| source.id()), source_id);
        assert_eq!(session.tally(), &tally);
        assert_eq!(session.marker(), Some(Marker::new(2.0)));
    }

    #[test]
    fn test_new_file_releases_previous_source() {
        let mut session = session();
        session.load_file(Some(Path::new("first.mp4"))).unwrap();
        let first = session.video().map(|source| source.id()).unwrap();
        session.load_file(Some(Path::new("second.mp4"))).unwrap();
        let second = session.video().map(|source| source.id()).unwrap();

        assert!(video_source::lookup(first).is_none());
        assert!(video_source::lookup(second).is_some());

        drop(session);
        assert!(video_source::lookup(second).is_none());
    }
}
