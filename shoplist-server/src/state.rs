//! Application state shared across handlers

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::store::ListStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn ListStore>,
    index_window: Duration,
}

impl AppState {
    pub fn new(store: Arc<dyn ListStore>, index_window: Duration) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                index_window,
            }),
        }
    }

    pub fn store(&self) -> &dyn ListStore {
        self.inner.store.as_ref()
    }

    pub fn index_window(&self) -> Duration {
        self.inner.index_window
    }

    /// Oldest creation time the index listing still shows.
    ///
    /// Saturates at the earliest representable time instead of overflowing.
    pub fn index_cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_sub_signed(self.inner.index_window)
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryListStore;
    use chrono::TimeZone;

    #[test]
    fn cutoff_subtracts_window() {
        let state = AppState::new(Arc::new(MemoryListStore::new()), Duration::days(7));
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        assert_eq!(
            state.index_cutoff(now),
            Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn cutoff_saturates_on_huge_window() {
        let state = AppState::new(
            Arc::new(MemoryListStore::new()),
            Duration::days(1_000_000_000),
        );
        assert_eq!(state.index_cutoff(Utc::now()), DateTime::<Utc>::MIN_UTC);
    }
}
