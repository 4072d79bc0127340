//! Shared application state.
//!
//! Holds the one `Repertory` handle built at startup. Every handler gets a
//! clone, which only clones the `Arc` around the store client.

use std::sync::Arc;

use repertory_core::music::Repertory;
use repertory_core::store::RecordStore;

/// Application state passed to all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub repertory: Repertory,
}

impl AppState {
    /// Creates the state around a process-wide store.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            repertory: Repertory::new(store),
        }
    }

    /// Creates a state over an in-memory store seeded with demo data.
    #[cfg(test)]
    pub async fn with_demo_data() -> Self {
        let store = crate::storage::InMemoryStore::new();
        crate::mock_data::seed(&store)
            .await
            .expect("seeding an in-memory store never fails");
        Self::new(Arc::new(store))
    }
}
