//! In-memory session store for calculator selections.
//!
//! The mutex is held for one map operation at a time and never across an
//! `.await`, so a plain `std::sync::Mutex` is enough.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::pricing::SelectionState;

#[derive(Debug, Clone, Copy)]
struct SessionEntry {
    selection: SelectionState,
    last_seen: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct SessionStore {
    entries: Mutex<HashMap<Uuid, SessionEntry>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, SessionEntry>> {
        // A panic while holding the lock cannot leave a half-written entry.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Opens a session with the default selection.
    pub fn create(&self) -> (Uuid, SelectionState) {
        self.create_at(Utc::now())
    }

    fn create_at(&self, now: DateTime<Utc>) -> (Uuid, SelectionState) {
        let id = Uuid::new_v4();
        let selection = SelectionState::default();
        self.lock().insert(
            id,
            SessionEntry {
                selection,
                last_seen: now,
            },
        );
        debug!(%id, "Session opened");
        (id, selection)
    }

    /// Current selection for `id`, refreshing its idle timer.
    pub fn get(&self, id: Uuid) -> Option<SelectionState> {
        let mut entries = self.lock();
        let entry = entries.get_mut(&id)?;
        entry.last_seen = Utc::now();
        Some(entry.selection)
    }

    /// Applies `f` to the selection for `id` and returns its result alongside
    /// the updated selection. `None` if the session does not exist.
    pub fn update<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut SelectionState) -> T,
    ) -> Option<(T, SelectionState)> {
        let mut entries = self.lock();
        let entry = entries.get_mut(&id)?;
        let out = f(&mut entry.selection);
        entry.last_seen = Utc::now();
        Some((out, entry.selection))
    }

    pub fn remove(&self, id: Uuid) -> bool {
        let removed = self.lock().remove(&id).is_some();
        if removed {
            debug!(%id, "Session closed");
        }
        removed
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }

    /// Drops sessions not seen for longer than `max_idle`. Returns how many.
    pub fn evict_idle(&self, max_idle: chrono::Duration) -> usize {
        self.evict_idle_at(Utc::now(), max_idle)
    }

    fn evict_idle_at(&self, now: DateTime<Utc>, max_idle: chrono::Duration) -> usize {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, entry| now - entry.last_seen <= max_idle);
        before - entries.len()
    }
}

/// Background task that evicts idle sessions once per `period`.
pub fn spawn_idle_sweeper(
    store: Arc<SessionStore>,
    max_idle: chrono::Duration,
    period: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let evicted = store.evict_idle(max_idle);
            if evicted > 0 {
                info!(evicted, remaining = store.len(), "Evicted idle sessions");
            }
        }
    })
}
