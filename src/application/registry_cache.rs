//! Registry Cache
//!
//! Holds the most recently fetched registry so single-chain lookups can skip
//! the network. Shared between use cases through an `Arc`.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::models::chain_registry::ChainRegistry;

/// Latest registry snapshot. Every store replaces the previous one, so with
/// overlapping fetches the last one to finish wins.
#[derive(Debug, Default)]
pub struct RegistryCache {
    current: RwLock<Option<Arc<ChainRegistry>>>,
}

impl RegistryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached snapshot
    pub async fn store(&self, registry: Arc<ChainRegistry>) {
        *self.current.write().await = Some(registry);
    }

    /// The cached snapshot, if a fetch has completed
    pub async fn current(&self) -> Option<Arc<ChainRegistry>> {
        self.current.read().await.clone()
    }
}
