//! Fixed filter data for the item catalog.

/// Type tag of non-physical hierarchy nodes
pub const NODE_TYPE: &str = "Node";

/// Marker the server uses in names of placeholder items
pub const DO_NOT_USE_MARKER: &str = "DO_NOT_USE";

/// Known broken/test items
pub const HIDDEN_ITEMS: &[&str] = &["5ae083b25acfc4001a5fc702"];

/// Parent categories whose children are never givable
pub const HIDDEN_CATEGORIES: &[&str] = &[
    "55d720f24bdc2d88028b456d",
    "62f109593b54472778797866",
    "63da6da4784a55176c018dba",
    "566abbb64bdc2d144c8b457d",
    "566965d44bdc2d814c8b4571",
];

/// Exclusion sets applied by the item builder
#[derive(Debug, Clone, Copy)]
pub struct ExclusionRules<'a> {
    pub hidden_items: &'a [&'a str],
    pub hidden_categories: &'a [&'a str],
}

impl Default for ExclusionRules<'static> {
    fn default() -> Self {
        Self {
            hidden_items: HIDDEN_ITEMS,
            hidden_categories: HIDDEN_CATEGORIES,
        }
    }
}

impl ExclusionRules<'_> {
    pub fn is_hidden_item(&self, id: &str) -> bool {
        self.hidden_items.iter().any(|hidden| *hidden == id)
    }

    pub fn is_hidden_category(&self, parent_id: &str) -> bool {
        self.hidden_categories.iter().any(|hidden| *hidden == parent_id)
    }
}
