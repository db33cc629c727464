//! Fetch Registry Use Case
//!
//! Fetches the full chain list and builds a registry of the chains that
//! expose a recognized explorer.

use std::sync::Arc;

use crate::application::registry_cache::RegistryCache;
use crate::domain::gateways::ChainSource;
use crate::domain::models::chain_registry::ChainRegistry;
use crate::shared::errors::UseCaseError;

/// Use case for fetching the chain registry
pub struct FetchRegistryUseCase {
    chain_source: Arc<dyn ChainSource>,
    registry_cache: Arc<RegistryCache>,
}

impl FetchRegistryUseCase {
    /// Create a new FetchRegistryUseCase
    #[must_use]
    pub fn new(chain_source: Arc<dyn ChainSource>, registry_cache: Arc<RegistryCache>) -> Self {
        Self {
            chain_source,
            registry_cache,
        }
    }

    /// Execute the use case
    ///
    /// Every call performs one request and replaces the cached registry.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Fetch` if the chain list cannot be fetched or decoded.
    pub async fn execute(&self) -> Result<Arc<ChainRegistry>, UseCaseError> {
        tracing::debug!("Fetching chain registry");

        let records = self.chain_source.fetch_records().await?;
        let total = records.len();

        let registry = Arc::new(ChainRegistry::from_records(records));
        self.registry_cache.store(registry.clone()).await;

        tracing::debug!(total, retained = registry.len(), "Chain registry fetched");
        Ok(registry)
    }
}
