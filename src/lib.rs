//! Chain Explorer Registry
//!
//! Fetches the public chain list and builds block explorer links for every
//! chain exposing an EIP-3091 explorer, following Clean/Hexagonal
//! Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
