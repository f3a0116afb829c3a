//! ============================================================================
//! Locale - Languages and localization tables
//! ============================================================================
//! `Locale` covers the languages the server ships; `LocaleTable` is the flat
//! key -> string mapping fetched from `/client/locale/{code}`. Missing keys
//! resolve to an empty string at lookup time.
//! ============================================================================

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Languages offered by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    Chinese,
    #[default]
    English,
    Czech,
    French,
    German,
    Hungarian,
    Italian,
    Japanese,
    Korean,
    Polish,
    Portuguese,
    Slovak,
    Spanish,
    SpanishMexico,
    Turkish,
    Romanian,
    Russian,
}

impl Locale {
    /// Menu order
    pub const ALL: [Locale; 17] = [
        Locale::Chinese,
        Locale::English,
        Locale::Czech,
        Locale::French,
        Locale::German,
        Locale::Hungarian,
        Locale::Italian,
        Locale::Japanese,
        Locale::Korean,
        Locale::Polish,
        Locale::Portuguese,
        Locale::Slovak,
        Locale::Spanish,
        Locale::SpanishMexico,
        Locale::Turkish,
        Locale::Romanian,
        Locale::Russian,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Locale::Chinese => "Chinese",
            Locale::English => "English",
            Locale::Czech => "Czech",
            Locale::French => "French",
            Locale::German => "German",
            Locale::Hungarian => "Hungarian",
            Locale::Italian => "Italian",
            Locale::Japanese => "Japanese",
            Locale::Korean => "Korean",
            Locale::Polish => "Polish",
            Locale::Portuguese => "Portuguese",
            Locale::Slovak => "Slovak",
            Locale::Spanish => "Spanish",
            Locale::SpanishMexico => "Spanish - Mexico",
            Locale::Turkish => "Turkish",
            Locale::Romanian => "Romanian",
            Locale::Russian => "Русский",
        }
    }

    /// Code understood by `/client/locale/{code}`
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Chinese => "ch",
            Locale::English => "en",
            Locale::Czech => "cz",
            Locale::French => "fr",
            Locale::German => "ge",
            Locale::Hungarian => "hu",
            Locale::Italian => "it",
            Locale::Japanese => "jp",
            Locale::Korean => "kr",
            Locale::Polish => "pl",
            Locale::Portuguese => "po",
            Locale::Slovak => "sk",
            Locale::Spanish => "es",
            Locale::SpanishMexico => "es-mx",
            Locale::Turkish => "tu",
            Locale::Romanian => "ro",
            Locale::Russian => "ru",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unknown language label or code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown locale '{0}'")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    /// Accepts either the label or the code, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Locale::ALL
            .iter()
            .copied()
            .find(|l| {
                l.code().eq_ignore_ascii_case(wanted)
                    || l.label().to_lowercase() == wanted.to_lowercase()
            })
            .ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

// Persisted by label, like the desktop menu does.
impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Flat localization table for one language
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LocaleTable {
    entries: HashMap<String, String>,
}

/// `/client/locale` answers either with the usual `{err, errmsg, data}`
/// envelope or with the bare map.
#[derive(Deserialize)]
#[serde(untagged)]
enum LocalePayload {
    Envelope { data: HashMap<String, String> },
    Flat(HashMap<String, String>),
}

impl<'de> Deserialize<'de> for LocaleTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = match LocalePayload::deserialize(deserializer)? {
            LocalePayload::Envelope { data } => data,
            LocalePayload::Flat(map) => map,
        };
        Ok(Self { entries })
    }
}

impl LocaleTable {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Raw lookup; empty string on miss
    pub fn get(&self, key: &str) -> &str {
        self.entries.get(key).map(String::as_str).unwrap_or("")
    }

    /// `"{id} Name"`
    pub fn name(&self, id: &str) -> &str {
        self.get(&format!("{} Name", id))
    }

    /// `"{id} Description"`
    pub fn description(&self, id: &str) -> &str {
        self.get(&format!("{} Description", id))
    }

    /// `"{id} Nickname"`
    pub fn nickname(&self, id: &str) -> &str {
        self.get(&format!("{} Nickname", id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocaleTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
