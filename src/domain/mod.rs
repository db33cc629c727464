//! Domain Layer
//!
//! Contains the chain models, the registry filtering rules and the gateway
//! traits (ports). This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::chain_source::ChainSource;
pub use models::{Chain, ChainRecord, ChainRegistry, Explorer, NativeCurrency};
