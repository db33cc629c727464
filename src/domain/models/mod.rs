//! Domain Models
//!
//! Pure domain entities and value objects representing chain metadata.

pub mod chain;
pub mod chain_record;
pub mod chain_registry;

pub use chain::{Chain, Explorer};
pub use chain_record::{ChainRecord, ExplorerRecord, NativeCurrency, RECOGNIZED_EXPLORER_STANDARD};
pub use chain_registry::ChainRegistry;
