//! ============================================================================
//! GIVE-CORE: Data layer for the give-ui companion
//! ============================================================================
//! This crate handles everything between the host UI and the game server:
//! - HTTP transport against the give-ui server mod (reqwest)
//! - Locale tables and the supported languages
//! - Item and trader view models built from raw catalog/profile data
//! - Administrative commands (give item, give preset, update trader)
//! - The host configuration store (locale, cache folder, favorites)
//! ============================================================================

pub mod api;
pub mod catalog;
pub mod config;
pub mod locale;
pub mod types;

// Re-export main types for convenience
pub use api::types::{GlobalPreset, ItemsResponse, Profile, RawItem, TraderSettings, TraderStanding};
pub use api::{SptClient, DEFAULT_SERVER_URL};
pub use catalog::{build_all_items, build_traders, sort_profiles};
pub use config::{apply_favorites, ConfigStore, FileConfigStore, HostConfig, MemoryConfigStore};
pub use locale::{Locale, LocaleTable};
pub use types::*;
