//! Shared Module
//!
//! Cross-cutting utilities and types used across the library.

pub mod errors;

pub use errors::{ConfigurationError, FetchError, UseCaseError};
