//! Fetch Chain Use Case
//!
//! Resolves a single chain by id, from the cached registry when possible.

use std::sync::Arc;

use crate::application::registry_cache::RegistryCache;
use crate::domain::gateways::ChainSource;
use crate::domain::models::chain::Chain;
use crate::shared::errors::UseCaseError;

/// Use case for fetching one chain by its chain id
pub struct FetchChainUseCase {
    chain_source: Arc<dyn ChainSource>,
    registry_cache: Arc<RegistryCache>,
}

impl FetchChainUseCase {
    /// Create a new FetchChainUseCase
    #[must_use]
    pub fn new(chain_source: Arc<dyn ChainSource>, registry_cache: Arc<RegistryCache>) -> Self {
        Self {
            chain_source,
            registry_cache,
        }
    }

    /// Execute the use case
    ///
    /// A non-empty cached registry is searched first. On a miss the whole
    /// list is fetched again and the first record with a matching id is
    /// turned into a chain. That path does not require a recognized explorer,
    /// so the returned chain may have no explorer links. The cache is not
    /// updated by this use case.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no record has the given chain id.
    /// Returns `UseCaseError::Fetch` if the chain list cannot be fetched.
    pub async fn execute(&self, chain_id: u64) -> Result<Chain, UseCaseError> {
        tracing::debug!(chain_id, "Fetching chain");

        let cached = self.registry_cache.current().await;
        if let Some(chain) = cached.as_deref().and_then(|registry| registry.find_by_id(chain_id)) {
            tracing::debug!(chain_id, "Chain found in cached registry");
            return Ok(chain.clone());
        }

        tracing::debug!(chain_id, cached = cached.is_some(), "Chain not cached, fetching chain list");

        let record = self
            .chain_source
            .fetch_records()
            .await?
            .into_iter()
            .find(|record| record.chain_id == chain_id)
            .ok_or_else(|| {
                tracing::warn!(chain_id, "Chain not found");
                UseCaseError::NotFound {
                    resource: "Chain".to_string(),
                    id: chain_id.to_string(),
                }
            })?;

        let chain = Chain::from_record(record);
        if chain.explorer().is_none() {
            tracing::warn!(chain_id, "Chain has no recognized explorer");
        }

        Ok(chain)
    }
}
