//! Chain Record
//!
//! Raw shape of one entry in the public chain list. Only the fields the
//! registry uses are modelled; everything else in the payload is ignored.

use serde::{Deserialize, Deserializer};

/// Explorer tag for the `/address/`, `/token/`, `/tx/`, `/block/` URL layout
pub const RECOGNIZED_EXPLORER_STANDARD: &str = "EIP3091";

/// Native currency of a chain
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Explorer descriptor as published in the chain list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExplorerRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub standard: Option<String>,
}

impl ExplorerRecord {
    /// Whether this explorer follows the recognized URL layout
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        self.standard.as_deref() == Some(RECOGNIZED_EXPLORER_STANDARD)
    }
}

/// One chain entry of the remote list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainRecord {
    pub name: String,
    #[serde(default, rename = "chain", deserialize_with = "null_as_empty")]
    pub chain_group: String,
    pub chain_id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub short_name: String,
    #[serde(default, rename = "infoURL")]
    pub info_url: Option<String>,
    pub native_currency: NativeCurrency,
    #[serde(default)]
    pub explorers: Option<Vec<ExplorerRecord>>,
}

/// Label fields are sometimes published as `null`; treat them like a missing key
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ChainRecord {
    /// First explorer tagged with the recognized standard, if any
    #[must_use]
    pub fn recognized_explorer(&self) -> Option<&ExplorerRecord> {
        self.explorers
            .as_deref()
            .and_then(|explorers| explorers.iter().find(|e| e.is_recognized()))
    }
}
