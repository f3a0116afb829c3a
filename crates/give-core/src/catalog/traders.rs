//! ============================================================================
//! Trader Builder - Trader settings + profile standing -> Trader views
//! ============================================================================
//! Only traders the profile has met and that are tradable outside of a raid
//! are kept. Output is ordered by trader id.
//! ============================================================================

use tracing::debug;

use crate::api::types::{Profile, TraderSettings};
use crate::locale::LocaleTable;
use crate::types::Trader;

/// Join trader settings with one profile's standings
pub fn build_traders(
    settings: &[TraderSettings],
    profile: &Profile,
    locale: &LocaleTable,
    base_url: &str,
) -> Vec<Trader> {
    let mut traders: Vec<Trader> = settings
        .iter()
        .filter(|trader| !trader.available_in_raid)
        .filter_map(|trader| {
            let standing = profile.standing(&trader.id)?;
            Some(Trader {
                id: trader.id.clone(),
                nickname: trader.nickname.clone(),
                nickname_locale: locale.nickname(&trader.id).to_string(),
                reputation: format!("{:.2}", standing.standing),
                sales_sum: standing.sales_sum.to_string(),
                image: format!("{}{}", base_url, trader.avatar),
                loyalty_level: standing.loyalty_level,
            })
        })
        .collect();

    // stable
    traders.sort_by(|a, b| a.id.cmp(&b.id));

    debug!(
        "Built {} of {} traders for profile {}",
        traders.len(),
        settings.len(),
        profile.session_id()
    );

    traders
}
