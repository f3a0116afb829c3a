//! ============================================================================
//! Host Config Types - State the host keeps between runs
//! ============================================================================

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Preferences and favorites owned by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostConfig {
    #[serde(default)]
    pub locale: Locale,
    /// Local cache folder of the game client, if the user picked one
    #[serde(default)]
    pub cache_folder: Option<PathBuf>,
    /// Favorite item ids
    #[serde(default)]
    pub favorites: BTreeSet<String>,
}

impl HostConfig {
    /// Returns true when the locale actually changed
    pub fn set_locale(&mut self, locale: Locale) -> bool {
        if self.locale == locale {
            return false;
        }
        self.locale = locale;
        true
    }

    pub fn set_cache_folder(&mut self, folder: PathBuf) {
        self.cache_folder = Some(folder);
    }

    pub fn clear_cache_folder(&mut self) {
        self.cache_folder = None;
    }

    pub fn is_favorite(&self, item_id: &str) -> bool {
        self.favorites.contains(item_id)
    }

    /// Flip the favorite flag; returns the new state
    pub fn toggle_favorite(&mut self, item_id: &str) -> bool {
        if self.favorites.remove(item_id) {
            false
        } else {
            self.favorites.insert(item_id.to_string());
            true
        }
    }
}
