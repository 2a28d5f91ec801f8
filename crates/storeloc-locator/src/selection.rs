//! Per-session current-store selection state.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;

use storeloc_core::StoreId;

/// Caller-facing retention window for a selection: 30 days.
pub const DEFAULT_RETENTION: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Opaque per-caller identity a selection is keyed by.
///
/// The transport layer derives this from its session cookie/token; the core
/// only requires that it is durable per distinct caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey(pub String);

#[derive(Debug, Clone, Copy)]
struct SelectionEntry {
    store_id: StoreId,
    expires_at: Instant,
}

/// In-memory selection store with bounded retention.
///
/// Entries past their deadline read as absent; the store never clears a live
/// selection on its own. A multi-instance deployment swaps this for a shared
/// key-value resource with the same contract (last-write-wins per session).
#[derive(Clone)]
pub struct SelectionStore {
    entries: Arc<Mutex<HashMap<SessionKey, SelectionEntry>>>,
    retention: Duration,
}

impl SelectionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_retention(DEFAULT_RETENTION)
    }

    #[must_use]
    pub fn with_retention(retention: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            retention,
        }
    }

    /// The selected store id for `session`, if one is set and unexpired.
    pub async fn get(&self, session: &SessionKey) -> Option<StoreId> {
        let entries = self.entries.lock().await;
        entries
            .get(session)
            .filter(|e| e.expires_at > Instant::now())
            .map(|e| e.store_id)
    }

    /// Persist `store_id` as the selection for `session`, resetting the
    /// retention deadline. Expired entries are pruned on the way.
    pub async fn set(&self, session: &SessionKey, store_id: StoreId) {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;
        entries.retain(|_, e| e.expires_at > now);
        entries.insert(
            session.clone(),
            SelectionEntry {
                store_id,
                expires_at: now + self.retention,
            },
        );
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}
