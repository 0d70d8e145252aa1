//! Ordered processing of user actions.
//!
//! Some actions need the playback position, which the webview reports
//! asynchronously. Every action goes through one queue so a later click can
//! never overtake an earlier one that is still waiting for its position.

use futures_util::{Stream, StreamExt};
use std::future::Future;

use super::{Category, CounterSession, Notice};
use crate::storage::KeyValueStore;

/// One user action against the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionOp {
    Increment(Category),
    Decrement(Category),
    ResetAll,
    SaveMarker,
    ClearMarker,
}

impl SessionOp {
    /// Whether the action records the current playback position.
    pub fn needs_position(&self) -> bool {
        matches!(self, SessionOp::Increment(_) | SessionOp::SaveMarker)
    }
}

impl<S: KeyValueStore> CounterSession<S> {
    /// Apply one action. `reported` is the position the surface gave, if any.
    pub fn apply(&mut self, op: SessionOp, reported: Option<f64>) -> Option<Notice> {
        let position = self.current_position(reported);
        match op {
            SessionOp::Increment(category) => self.increment(category, position),
            SessionOp::Decrement(category) => self.decrement(category),
            SessionOp::ResetAll => self.reset_all(),
            SessionOp::SaveMarker => {
                // Nothing to mark without a video.
                if !self.has_video() {
                    return None;
                }
                return Some(self.save_marker(position));
            }
            SessionOp::ClearMarker => return Some(self.clear_marker()),
        }
        None
    }
}

/// Drain `ops` one at a time, reading the position only for actions that need it.
///
/// The next action is not looked at until the previous one has been applied.
pub async fn run_session_ops<St, P, Fut, A>(mut ops: St, mut read_position: P, mut apply: A)
where
    St: Stream<Item = SessionOp> + Unpin,
    P: FnMut() -> Fut,
    Fut: Future<Output = Option<f64>>,
    A: FnMut(SessionOp, Option<f64>),
{
    while let Some(op) = ops.next().await {
        let reported = if op.needs_position() {
            read_position().await
        } else {
            None
        };
        apply(op, reported);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::state::{Marker, Tally};
    use crate::storage::{MemoryStore, Repository};
    use futures_util::stream;
    use std::path::Path;
    use std::time::Duration;

    fn session_with_video() -> CounterSession<MemoryStore> {
        let mut session =
            CounterSession::open(Repository::new(MemoryStore::default()), &AppConfig::default());
        session.load_file(Some(Path::new("street.mp4"))).unwrap();
        session
    }

    /// A position source that answers late, like the webview does.
    async fn slow_position(position: f64) -> Option<f64> {
        tokio::time::sleep(Duration::from_millis(20)).await;
        Some(position)
    }

    async fn run(session: &mut CounterSession<MemoryStore>, ops: Vec<SessionOp>) -> Vec<Notice> {
        let mut notices = Vec::new();
        run_session_ops(
            stream::iter(ops),
            || slow_position(12.5),
            |op, reported| notices.extend(session.apply(op, reported)),
        )
        .await;
        notices
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_increment_then_decrement_ends_at_zero() {
        let mut session = session_with_video();
        run(
            &mut session,
            vec![SessionOp::Increment(Category::Bike), SessionOp::Decrement(Category::Bike)],
        )
        .await;
        assert_eq!(session.tally().count(Category::Bike), 0);
        assert_eq!(session.tally().timestamps(Category::Bike), &[12.5]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_reset_after_increment_clears_it() {
        let mut session = session_with_video();
        run(
            &mut session,
            vec![SessionOp::Increment(Category::Vehicle), SessionOp::ResetAll],
        )
        .await;
        assert_eq!(session.tally(), &Tally::default());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_marker_ops_keep_order() {
        let mut session = session_with_video();
        let notices = run(&mut session, vec![SessionOp::SaveMarker, SessionOp::ClearMarker]).await;
        assert_eq!(notices, vec![Notice::MarkerSaved(12.5), Notice::MarkerCleared]);
        assert_eq!(session.marker(), None);

        let notices = run(&mut session, vec![SessionOp::ClearMarker, SessionOp::SaveMarker]).await;
        assert_eq!(notices, vec![Notice::MarkerCleared, Notice::MarkerSaved(12.5)]);
        assert_eq!(session.marker(), Some(Marker::new(12.5)));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_position_read_only_when_needed() {
        let mut reads = 0;
        run_session_ops(
            stream::iter(vec![
                SessionOp::Decrement(Category::Bike),
                SessionOp::ResetAll,
                SessionOp::Increment(Category::Bike),
                SessionOp::ClearMarker,
            ]),
            || {
                reads += 1;
                async { Some(1.0) }
            },
            |_, _| {},
        )
        .await;
        assert_eq!(reads, 1);
    }

    #[test]
    fn test_apply_without_video() {
        let mut session =
            CounterSession::open(Repository::new(MemoryStore::default()), &AppConfig::default());
        assert_eq!(session.apply(SessionOp::Increment(Category::EBike), Some(9.0)), None);
        assert_eq!(session.tally().timestamps(Category::EBike), &[0.0]);
        assert_eq!(session.apply(SessionOp::SaveMarker, Some(9.0)), None);
        assert_eq!(session.marker(), None);
    }
}
