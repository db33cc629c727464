//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - HTTP chain list source
//! - Configuration

pub mod chain_source;
pub mod config;

pub use chain_source::HttpChainSource;
pub use config::AppConfig;
