//! HTTP Chain Source Implementation
//!
//! Implements the ChainSource trait by downloading the JSON chain list.

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::gateways::ChainSource;
use crate::domain::models::chain_record::ChainRecord;
use crate::infrastructure::driven_adapters::config::ChainListConfig;
use crate::shared::errors::FetchError;

/// HTTP implementation of ChainSource
pub struct HttpChainSource {
    client: Client,
    url: String,
}

impl HttpChainSource {
    /// Create a new HttpChainSource
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Request` if the HTTP client cannot be built.
    pub fn new(config: &ChainListConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: config.url.clone(),
        })
    }

}

#[async_trait]
impl ChainSource for HttpChainSource {
    async fn fetch_records(&self) -> Result<Vec<ChainRecord>, FetchError> {
        tracing::debug!(url = %self.url, "Requesting chain list");

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, status = status.as_u16(), "Chain list request failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.bytes().await?;
        decode_chain_list(&body)
    }
}

/// Decode the chain list body.
///
/// The body must be a JSON array. Elements that do not match the record
/// shape are logged and skipped.
fn decode_chain_list(body: &[u8]) -> Result<Vec<ChainRecord>, FetchError> {
    let entries: Vec<serde_json::Value> = serde_json::from_slice(body)?;
    let total = entries.len();

    let records: Vec<ChainRecord> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(error) => {
                tracing::warn!(index, %error, "Skipping malformed chain record");
                None
            }
        })
        .collect();

    tracing::debug!(total, decoded = records.len(), "Chain list decoded");
    Ok(records)
}
