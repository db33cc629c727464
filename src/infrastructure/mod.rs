//! Infrastructure Layer
//!
//! Contains all external concerns: the driven adapters (chain list source,
//! configuration) that implement the domain gateways.

pub mod driven_adapters;
