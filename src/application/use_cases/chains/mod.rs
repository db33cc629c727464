//! Chain Use Cases
//!
//! Fetching the chain registry and resolving single chains.

mod fetch_chain;
mod fetch_registry;

pub use fetch_chain::FetchChainUseCase;
pub use fetch_registry::FetchRegistryUseCase;
