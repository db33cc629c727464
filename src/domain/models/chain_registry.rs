//! Chain Registry Domain Model
//!
//! Snapshot of every chain from one fetch that exposes a recognized explorer.

use chrono::{DateTime, Utc};

use super::chain::Chain;
use super::chain_record::ChainRecord;

/// Ordered collection of chains built from one fetch
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    chains: Vec<Chain>,
    fetched_at: DateTime<Utc>,
}

impl ChainRegistry {
    /// Build a registry, keeping only records with a recognized explorer.
    /// Source order is preserved.
    #[must_use]
    pub fn from_records(records: Vec<ChainRecord>) -> Self {
        let chains = records
            .into_iter()
            .filter(|record| record.recognized_explorer().is_some())
            .map(Chain::from_record)
            .collect();

        Self {
            chains,
            fetched_at: Utc::now(),
        }
    }

    /// All retained chains, in source order
    #[must_use]
    pub fn list(&self) -> &[Chain] {
        &self.chains
    }

    /// First chain with the given id
    #[must_use]
    pub fn find_by_id(&self, chain_id: u64) -> Option<&Chain> {
        self.chains.iter().find(|chain| chain.chain_id() == chain_id)
    }

    /// Chains whose display name contains `name`, ignoring case
    #[must_use]
    pub fn search_by_name(&self, name: &str) -> Vec<&Chain> {
        let needle = name.to_lowercase();
        self.chains
            .iter()
            .filter(|chain| chain.name().to_lowercase().contains(&needle))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// When the underlying list was fetched
    #[must_use]
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}
