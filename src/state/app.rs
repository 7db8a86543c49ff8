use std::sync::Arc;

use crate::pipeline::Pipeline;
use crate::services::item_service;
use crate::state::item::Item;
use crate::state::store::MemStore;

/// The item store shared by every route.
pub type ItemStore = Arc<MemStore<Item>>;

/// In-memory shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: ItemStore,
    pub pipeline: Arc<Pipeline>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemStore::new()),
            pipeline: Arc::new(Pipeline::api()),
        }
    }

    /// Build the state and insert `seed` into the store.
    ///
    /// Seeds go through the same checks as `/api/create`; rejected entries
    /// are logged and skipped.
    pub fn with_seed(seed: impl IntoIterator<Item = Item>) -> Self {
        let state = Self::new();

        for item in seed {
            let id = item.id.clone();
            if let Err(e) = item_service::insert(&state.store, item) {
                tracing::warn!("Skipping seed item {:?}: {}", id, e);
            }
        }

        tracing::info!("Seeded store: {} items", state.store.len());
        state
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
