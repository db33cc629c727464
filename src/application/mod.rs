//! Application Layer
//!
//! Contains use cases that orchestrate the domain, plus the registry cache
//! they share. Use cases depend on domain gateways (abstractions), not
//! concrete implementations.

pub mod registry_cache;
pub mod use_cases;

pub use registry_cache::RegistryCache;
