//! ============================================================================
//! Wire Types - Payloads exchanged with the server
//! ============================================================================
//! Field names follow the server's template schema (`_id`, `_parent`,
//! `_props`, ...). Plain camelCase aliases are accepted as well. Everything
//! that may be absent on a fresh profile or a sparse template defaults.
//! ============================================================================

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Item catalog
// ============================================================================

/// Payload of `/give-ui/items`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: HashMap<String, RawItem>,
    #[serde(default)]
    pub global_presets: Vec<GlobalPreset>,
}

/// One catalog template
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawItem {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "_type", alias = "type", default)]
    pub item_type: String,
    #[serde(rename = "_parent", alias = "parent", default)]
    pub parent: String,
    #[serde(rename = "_props", alias = "props", default)]
    pub props: ItemProps,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemProps {
    #[serde(rename = "StackMaxSize", alias = "stackMaxSize", default)]
    pub stack_max_size: i64,
    #[serde(rename = "IsUnbuyable", alias = "isUnbuyable", default)]
    pub is_unbuyable: bool,
}

/// Server-defined weapon preset
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalPreset {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(
        rename = "_encyclopedia",
        alias = "encyclopedia",
        default,
        deserialize_with = "encyclopedia_flag"
    )]
    pub encyclopedia: bool,
}

/// The encyclopedia field is a template id on most servers and a plain flag
/// on some; either way it means "unlocks an entry".
fn encyclopedia_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Encyclopedia {
        Flag(bool),
        Template(String),
    }

    Ok(match Option::<Encyclopedia>::deserialize(deserializer)? {
        Some(Encyclopedia::Flag(flag)) => flag,
        Some(Encyclopedia::Template(tpl)) => !tpl.is_empty(),
        None => false,
    })
}

// ============================================================================
// Traders
// ============================================================================

/// Payload of `/client/trading/api/traderSettings`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TradersResponse {
    #[serde(alias = "traders", default)]
    pub data: Vec<TraderSettings>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraderSettings {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub nickname: String,
    /// Server-relative path, e.g. `/files/trader/avatar/x.jpg`
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub available_in_raid: bool,
}

// ============================================================================
// Profiles
// ============================================================================

/// A player profile as returned by `/give-ui/profiles`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub info: ProfileInfo,
    #[serde(default)]
    pub characters: Characters,
}

impl Profile {
    pub fn session_id(&self) -> &str {
        &self.info.id
    }

    pub fn username(&self) -> &str {
        &self.info.username
    }

    /// Standing record for a trader, if this profile has met them
    pub fn standing(&self, trader_id: &str) -> Option<&TraderStanding> {
        self.characters.pmc.traders_info.get(trader_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub edition: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Characters {
    #[serde(default)]
    pub pmc: PmcCharacter,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PmcCharacter {
    #[serde(rename = "Info", alias = "info", default)]
    pub info: Option<CharacterInfo>,
    #[serde(rename = "TradersInfo", alias = "tradersInfo", default)]
    pub traders_info: HashMap<String, TraderStanding>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterInfo {
    #[serde(rename = "Nickname", alias = "nickname", default)]
    pub nickname: String,
    #[serde(rename = "Level", alias = "level", default)]
    pub level: i32,
}

/// One trader's reputation/sales/loyalty record for a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraderStanding {
    #[serde(default)]
    pub standing: f64,
    #[serde(default, deserialize_with = "integral")]
    pub sales_sum: i64,
    #[serde(default)]
    pub loyalty_level: i32,
}

/// Sales sums are written as floats by some server versions.
fn integral<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(n) = number.as_i64() {
        return Ok(n);
    }
    number
        .as_f64()
        .map(|f| f.trunc() as i64)
        .ok_or_else(|| serde::de::Error::custom(format!("salesSum out of range: {}", number)))
}

// ============================================================================
// Mutation requests
// ============================================================================

/// Body of `/give-ui/give`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub item_id: String,
    pub amount: i64,
}

/// Body of `/give-ui/give-user-preset`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserWeaponPresetRequest {
    pub item_id: String,
}

/// Body of `/give-ui/update-trader`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTraderRequest {
    pub nickname: String,
    pub spend: String,
    pub rep: String,
}
