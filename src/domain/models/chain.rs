//! Chain Domain Model
//!
//! Immutable view over one network's metadata, with block explorer link
//! builders.

use std::fmt::Display;

use super::chain_record::{ChainRecord, NativeCurrency};

/// Block explorer following the recognized URL layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explorer {
    name: String,
    url: String,
}

impl Explorer {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base URL the link builders append their path to
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Chain domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    chain_group: String,
    chain_id: u64,
    explorer: Option<Explorer>,
    info_url: Option<String>,
    name: String,
    native_currency: NativeCurrency,
    short_name: String,
}

impl Chain {
    /// Build a chain from a raw record.
    ///
    /// The record is not required to carry a recognized explorer; without one,
    /// or when its URL is missing or empty, every link builder returns `None`.
    #[must_use]
    pub fn from_record(record: ChainRecord) -> Self {
        let explorer = record.recognized_explorer().and_then(|e| {
            e.url
                .as_deref()
                .filter(|url| !url.is_empty())
                .map(|url| Explorer {
                    name: e.name.clone(),
                    url: url.to_string(),
                })
        });

        Self {
            chain_group: record.chain_group,
            chain_id: record.chain_id,
            explorer,
            info_url: record.info_url,
            name: record.name,
            native_currency: record.native_currency,
            short_name: record.short_name,
        }
    }

    /// Explorer link for an account address
    #[must_use]
    pub fn address(&self, address: &str) -> Option<String> {
        self.explorer_link("address", address)
    }

    /// Explorer link for a token contract address
    #[must_use]
    pub fn token(&self, token_address: &str) -> Option<String> {
        self.explorer_link("token", token_address)
    }

    /// Explorer link for a transaction hash
    #[must_use]
    pub fn tx(&self, tx_hash: &str) -> Option<String> {
        self.explorer_link("tx", tx_hash)
    }

    /// Explorer link for a block, by hash or by height
    #[must_use]
    pub fn block(&self, hash_or_height: impl Display) -> Option<String> {
        self.explorer_link("block", hash_or_height)
    }

    fn explorer_link(&self, segment: &str, id: impl Display) -> Option<String> {
        self.explorer_base_url()
            .map(|base| format!("{base}/{segment}/{id}"))
    }

    // Getters

    #[must_use]
    pub fn chain_group(&self) -> &str {
        &self.chain_group
    }

    #[must_use]
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    #[must_use]
    pub fn explorer(&self) -> Option<&Explorer> {
        self.explorer.as_ref()
    }

    #[must_use]
    pub fn explorer_base_url(&self) -> Option<&str> {
        self.explorer.as_ref().map(Explorer::url)
    }

    #[must_use]
    pub fn info_url(&self) -> Option<&str> {
        self.info_url.as_deref()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn native_currency(&self) -> &NativeCurrency {
        &self.native_currency
    }

    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.short_name
    }
}
