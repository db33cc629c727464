//! Common test utilities for e2e tests
//!
//! Provides a wiremock server standing in for the public chain list and a
//! fully wired test application.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use chain_explorer_registry::application::use_cases::chains::{FetchChainUseCase, FetchRegistryUseCase};
use chain_explorer_registry::application::RegistryCache;
use chain_explorer_registry::domain::gateways::ChainSource;
use chain_explorer_registry::infrastructure::driven_adapters::config::ChainListConfig;
use chain_explorer_registry::infrastructure::driven_adapters::HttpChainSource;

pub const CHAIN_LIST_PATH: &str = "/chains.json";

/// Test application context
pub struct TestApp {
    pub server: MockServer,
    pub registry_cache: Arc<RegistryCache>,
    pub fetch_registry_use_case: FetchRegistryUseCase,
    pub fetch_chain_use_case: FetchChainUseCase,
}

impl TestApp {
    /// Create a new test application backed by a fresh mock server
    pub async fn new() -> Self {
        let server = MockServer::start().await;

        let config = ChainListConfig {
            url: format!("{}{}", server.uri(), CHAIN_LIST_PATH),
            timeout_secs: Some(5),
        };
        let chain_source: Arc<dyn ChainSource> =
            Arc::new(HttpChainSource::new(&config).expect("Failed to build chain source"));
        let registry_cache = Arc::new(RegistryCache::new());

        let fetch_registry_use_case = FetchRegistryUseCase::new(chain_source.clone(), registry_cache.clone());
        let fetch_chain_use_case = FetchChainUseCase::new(chain_source, registry_cache.clone());

        Self {
            server,
            registry_cache,
            fetch_registry_use_case,
            fetch_chain_use_case,
        }
    }

    /// Serve `body` from the chain list endpoint, expecting `times` requests
    pub async fn serve_chain_list(&self, body: Value, times: u64) {
        Mock::given(method("GET"))
            .and(path(CHAIN_LIST_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Serve an error status from the chain list endpoint
    pub async fn serve_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path(CHAIN_LIST_PATH))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }
}

/// Chain list entry with an EIP-3091 explorer
pub fn chain_entry(chain_id: u64, name: &str, explorer_url: &str) -> Value {
    json!({
        "name": name,
        "chain": "ETH",
        "chainId": chain_id,
        "shortName": name.to_lowercase().replace(' ', "-"),
        "infoURL": "https://example.org",
        "nativeCurrency": { "name": "Ether", "symbol": "ETH", "decimals": 18 },
        "explorers": [
            { "name": "scan", "url": explorer_url, "standard": "EIP3091" }
        ]
    })
}

/// Chain list entry without any explorer
pub fn chain_entry_without_explorer(chain_id: u64, name: &str) -> Value {
    json!({
        "name": name,
        "chain": "TEST",
        "chainId": chain_id,
        "shortName": "bare",
        "nativeCurrency": { "name": "Test", "symbol": "TST", "decimals": 18 }
    })
}

/// The single Ethereum record used in the documentation example
pub fn ethereum_entry() -> Value {
    json!({
        "chainId": 1,
        "name": "Ethereum Mainnet",
        "explorers": [{ "standard": "EIP3091", "url": "https://etherscan.io" }],
        "nativeCurrency": { "name": "Ether", "symbol": "ETH", "decimals": 18 }
    })
}

/// A realistic slice of the public chain list
pub fn sample_chain_list() -> Value {
    json!([
        ethereum_entry(),
        chain_entry(2000, "Dogechain Mainnet", "https://explorer.dogechain.dog"),
        chain_entry_without_explorer(3, "Ropsten"),
        chain_entry(568, "Dogechain Testnet", "https://explorer-testnet.dogechain.dog"),
        {
            "name": "Blockscout Only",
            "chainId": 77,
            "nativeCurrency": { "name": "Spoa", "symbol": "SPOA", "decimals": 18 },
            "explorers": [{ "name": "blockscout", "url": "https://blockscout.com/poa/sokol", "standard": "none" }]
        }
    ])
}
