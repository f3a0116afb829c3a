//! ============================================================================
//! Core Types for Give UI
//! ============================================================================
//! View models handed to the host for display, plus the error type shared by
//! every network-facing operation. Raw server payloads live in `api::types`
//! and never leave the crate's builders.
//! ============================================================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Result alias for operations that talk to the server
pub type Result<T> = std::result::Result<T, GiveError>;

/// Errors surfaced by the transport layer and propagated unchanged
#[derive(Debug, thiserror::Error)]
pub enum GiveError {
    /// Connection refused, DNS failure, timeout or a non-success status
    #[error("Network error calling {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response body did not match the expected JSON shape
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GiveError {
    pub fn is_network(&self) -> bool {
        matches!(self, GiveError::Network { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, GiveError::Decode { .. })
    }

    /// URL of the request that failed
    pub fn url(&self) -> &str {
        match self {
            GiveError::Network { url, .. } | GiveError::Decode { url, .. } => url,
        }
    }
}

// ============================================================================
// Server
// ============================================================================

/// Identity/version metadata returned by the give-ui server mod
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub mod_version: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    /// Anything else the server reports
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

// ============================================================================
// Items
// ============================================================================

/// An item ready for display, joined against the locale table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub description: String,
    pub category: String,
    pub max_stock: i64,
    /// Host-owned state, always false when built
    pub favorite: bool,
}

/// A server-defined weapon preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewPreset {
    pub id: String,
    /// Whether the preset unlocks an encyclopedia entry
    pub encyclopedia: bool,
}

/// Complete output of the item pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllItems {
    /// Distinct category names, sorted ascending
    pub categories: Vec<String>,
    pub items: HashMap<String, ViewItem>,
    pub global_presets: Vec<ViewPreset>,
}

impl AllItems {
    /// Items in one category, sorted by name
    pub fn in_category(&self, category: &str) -> Vec<&ViewItem> {
        let mut items: Vec<&ViewItem> = self
            .items
            .values()
            .filter(|item| item.category == category)
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        items
    }

    /// Case-insensitive search over id and name, sorted by name
    pub fn search(&self, query: &str) -> Vec<&ViewItem> {
        let needle = query.to_lowercase();
        let mut items: Vec<&ViewItem> = self
            .items
            .values()
            .filter(|item| {
                item.id.to_lowercase().contains(&needle)
                    || item.name.to_lowercase().contains(&needle)
            })
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        items
    }
}

// ============================================================================
// Traders
// ============================================================================

/// A trader as shown for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trader {
    pub id: String,
    pub nickname: String,
    pub nickname_locale: String,
    /// Standing formatted to two decimals
    pub reputation: String,
    pub sales_sum: String,
    /// Absolute avatar URL
    pub image: String,
    pub loyalty_level: i32,
}
