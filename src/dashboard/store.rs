use std::time::{Duration, Instant};

use dashmap::DashMap;
use uuid::Uuid;

use crate::models::Analysis;

use super::{Dashboard, UploadInProgress, UploadTicket};

/// Dashboards keyed by session id.
///
/// Map guards are only held inside these methods, never across an await.
pub struct SessionStore {
    sessions: DashMap<Uuid, Dashboard>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Snapshot of a session's dashboard; a fresh one if unknown.
    pub fn snapshot(&self, session: Uuid) -> Dashboard {
        self.sessions
            .get(&session)
            .map(|d| d.value().clone())
            .unwrap_or_default()
    }

    pub fn begin_upload(&self, session: Uuid) -> Result<UploadTicket, UploadInProgress> {
        self.sessions.entry(session).or_default().begin_upload()
    }

    pub fn complete(&self, session: Uuid, ticket: UploadTicket, analysis: Analysis) -> bool {
        self.sessions
            .get_mut(&session)
            .is_some_and(|mut d| d.complete(ticket, analysis))
    }

    pub fn fail(&self, session: Uuid, ticket: UploadTicket, message: impl Into<String>) -> bool {
        self.sessions
            .get_mut(&session)
            .is_some_and(|mut d| d.fail(ticket, message))
    }

    pub fn flash(&self, session: Uuid, message: impl Into<String>) {
        self.sessions.entry(session).or_default().flash(message);
    }

    pub fn reset(&self, session: Uuid) {
        if let Some(mut dashboard) = self.sessions.get_mut(&session) {
            dashboard.reset();
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop sessions idle for longer than `max_age`. Sessions with an upload
    /// in flight are kept.
    pub fn cleanup(&self, max_age: Duration) {
        let now = Instant::now();
        self.sessions
            .retain(|_, d| d.is_loading() || now.duration_since(d.touched_at()) < max_age);
    }
}
