//! Chain Explorer Registry - Demo Entry Point
//!
//! Fetches the registry, searches it by name and prints explorer links for
//! a single chain.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chain_explorer_registry::application::use_cases::chains::{FetchChainUseCase, FetchRegistryUseCase};
use chain_explorer_registry::application::RegistryCache;
use chain_explorer_registry::domain::gateways::ChainSource;
use chain_explorer_registry::infrastructure::driven_adapters::config::{AppConfig, LogFormat};
use chain_explorer_registry::infrastructure::driven_adapters::HttpChainSource;

const CHAIN_ID: u64 = 1;
const SEARCH_TERM: &str = "doge";
const ACCOUNT_ADDRESS: &str = "0x0255c9D3850cacA1152AEB20425C264787661692";
const TOKEN_ADDRESS: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
const TX_HASH: &str = "0xe207224986764f5419887952f1923851bcf03d23268903d4cf0b94c10635bc09";
const BLOCK_HEIGHT: u64 = 15_798_835;

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "chain_explorer_registry=debug".into());

    match format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;
    init_tracing(config.logging.format);
    tracing::info!(url = %config.chain_list.url, "Configuration loaded successfully");

    // Create chain source and shared cache
    let chain_source: Arc<dyn ChainSource> = Arc::new(HttpChainSource::new(&config.chain_list)?);
    let registry_cache = Arc::new(RegistryCache::new());

    // Create use cases
    let fetch_registry_use_case = FetchRegistryUseCase::new(chain_source.clone(), registry_cache.clone());
    let fetch_chain_use_case = FetchChainUseCase::new(chain_source, registry_cache);

    let registry = fetch_registry_use_case.execute().await?;
    tracing::info!(count = registry.len(), fetched_at = %registry.fetched_at(), "Registry ready");

    for chain in registry.search_by_name(SEARCH_TERM) {
        tracing::info!(
            chain_id = chain.chain_id(),
            name = chain.name(),
            short_name = chain.short_name(),
            "Search match"
        );
    }

    let chain = fetch_chain_use_case.execute(CHAIN_ID).await?;
    let currency = chain.native_currency();
    tracing::info!(
        chain_id = chain.chain_id(),
        name = chain.name(),
        short_name = chain.short_name(),
        info_url = chain.info_url().unwrap_or_default(),
        currency = %currency.symbol,
        decimals = currency.decimals,
        "Chain resolved"
    );

    tracing::info!(
        address = %chain.address(ACCOUNT_ADDRESS).unwrap_or_default(),
        token = %chain.token(TOKEN_ADDRESS).unwrap_or_default(),
        tx = %chain.tx(TX_HASH).unwrap_or_default(),
        block = %chain.block(BLOCK_HEIGHT).unwrap_or_default(),
        "Explorer links"
    );

    Ok(())
}
