//! ============================================================================
//! Catalog Module - View-model builders
//! ============================================================================
//! Pure functions that reshape raw server payloads into what the host shows:
//! - `build_all_items`: item catalog + locale -> categories, items, presets
//! - `build_traders`: trader settings + profile standing + locale -> traders
//! - `sort_profiles`: session map -> profiles ordered by username
//!
//! Nothing here performs I/O; the `api` module fetches and feeds these.
//! ============================================================================

pub mod exclusions;
mod items;
mod profiles;
mod traders;

pub use exclusions::{ExclusionRules, HIDDEN_CATEGORIES, HIDDEN_ITEMS};
pub use items::{build_all_items, build_all_items_with, view_item};
pub use profiles::sort_profiles;
pub use traders::build_traders;
