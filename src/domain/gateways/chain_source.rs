//! Chain Source Gateway
//!
//! Abstract trait defining where raw chain records come from.

use async_trait::async_trait;

use crate::domain::models::chain_record::ChainRecord;
use crate::shared::errors::FetchError;

/// Source of the raw chain list
#[async_trait]
pub trait ChainSource: Send + Sync {
    /// Fetch every record of the chain list, in source order
    async fn fetch_records(&self) -> Result<Vec<ChainRecord>, FetchError>;
}
