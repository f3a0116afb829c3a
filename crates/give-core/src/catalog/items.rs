//! ============================================================================
//! Item Builder - Catalog + locale -> AllItems
//! ============================================================================
//! Every raw template goes through the same short-circuiting checks:
//! 1. hierarchy nodes and unbuyable templates are dropped
//! 2. known broken items are dropped
//! 3. the category is the localized name of the parent, else the grandparent;
//!    no name at either tier drops the item
//! 4. children of hidden categories are dropped
//! 5. items without a usable localized name are dropped
//! ============================================================================

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use super::exclusions::{ExclusionRules, DO_NOT_USE_MARKER, NODE_TYPE};
use crate::api::types::{GlobalPreset, RawItem};
use crate::locale::LocaleTable;
use crate::types::{AllItems, ViewItem, ViewPreset};

/// Build the item view with the default exclusion rules
pub fn build_all_items(
    raw_items: &HashMap<String, RawItem>,
    presets: &[GlobalPreset],
    locale: &LocaleTable,
) -> AllItems {
    build_all_items_with(raw_items, presets, locale, &ExclusionRules::default())
}

/// Build the item view with explicit exclusion rules
pub fn build_all_items_with(
    raw_items: &HashMap<String, RawItem>,
    presets: &[GlobalPreset],
    locale: &LocaleTable,
    rules: &ExclusionRules<'_>,
) -> AllItems {
    let global_presets = presets
        .iter()
        .map(|preset| ViewPreset {
            id: preset.id.clone(),
            encyclopedia: preset.encyclopedia,
        })
        .collect();

    let mut items = HashMap::new();
    let mut categories = BTreeSet::new();

    for raw in raw_items.values() {
        if let Some(item) = view_item(raw, raw_items, locale, rules) {
            categories.insert(item.category.clone());
            items.insert(item.id.clone(), item);
        }
    }

    debug!(
        "Built {} items in {} categories from {} templates",
        items.len(),
        categories.len(),
        raw_items.len()
    );

    AllItems {
        categories: categories.into_iter().collect(),
        items,
        global_presets,
    }
}

/// Project one template, or `None` when any rule excludes it
pub fn view_item(
    raw: &RawItem,
    catalog: &HashMap<String, RawItem>,
    locale: &LocaleTable,
    rules: &ExclusionRules<'_>,
) -> Option<ViewItem> {
    if raw.item_type == NODE_TYPE || raw.props.is_unbuyable {
        return None;
    }

    if rules.is_hidden_item(&raw.id) {
        return None;
    }

    let category = resolve_category(raw, catalog, locale)?;

    if rules.is_hidden_category(&raw.parent) {
        return None;
    }

    let name = locale.name(&raw.id);
    if name.is_empty() || name.contains(DO_NOT_USE_MARKER) {
        return None;
    }

    Some(ViewItem {
        id: raw.id.clone(),
        name: name.to_string(),
        item_type: raw.item_type.clone(),
        description: locale.description(&raw.id).to_string(),
        category: category.to_string(),
        max_stock: raw.props.stack_max_size,
        favorite: false,
    })
}

/// Localized parent name, falling back to the grandparent's
fn resolve_category<'l>(
    raw: &RawItem,
    catalog: &HashMap<String, RawItem>,
    locale: &'l LocaleTable,
) -> Option<&'l str> {
    let parent = locale.name(&raw.parent);
    if !parent.is_empty() {
        return Some(parent);
    }

    // A parent missing from the catalog has no grandparent either.
    let grandparent = catalog
        .get(&raw.parent)
        .map(|parent| locale.name(&parent.parent))
        .unwrap_or("");
    if !grandparent.is_empty() {
        return Some(grandparent);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::ItemProps;
    use crate::catalog::exclusions::{HIDDEN_CATEGORIES, HIDDEN_ITEMS};

    fn raw(id: &str, parent: &str, item_type: &str) -> RawItem {
        RawItem {
            id: id.to_string(),
            item_type: item_type.to_string(),
            parent: parent.to_string(),
            props: ItemProps {
                stack_max_size: 1,
                is_unbuyable: false,
            },
        }
    }

    fn catalog(items: Vec<RawItem>) -> HashMap<String, RawItem> {
        items.into_iter().map(|i| (i.id.clone(), i)).collect()
    }

    fn locale(pairs: &[(&str, &str)]) -> LocaleTable {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn test_basic_item_is_built() {
        let items = catalog(vec![raw("A", "P", "Item"), raw("P", "", "Node")]);
        let table = locale(&[("P Name", "Ammo"), ("A Name", "Bullet"), ("A Description", "Goes fast")]);

        let all = build_all_items(&items, &[], &table);

        let item = &all.items["A"];
        assert_eq!(item.name, "Bullet");
        assert_eq!(item.category, "Ammo");
        assert_eq!(item.description, "Goes fast");
        assert_eq!(item.item_type, "Item");
        assert!(!item.favorite);
        assert_eq!(all.categories, vec!["Ammo".to_string()]);
        // The node itself never shows up
        assert!(!all.items.contains_key("P"));
    }

    #[test]
    fn test_nodes_and_unbuyable_are_excluded() {
        let mut unbuyable = raw("U", "P", "Item");
        unbuyable.props.is_unbuyable = true;
        let items = catalog(vec![raw("N", "P", "Node"), unbuyable]);
        let table = locale(&[("P Name", "Ammo"), ("N Name", "Node"), ("U Name", "Unbuyable")]);

        let all = build_all_items(&items, &[], &table);
        assert!(all.items.is_empty());
        assert!(all.categories.is_empty());
    }

    #[test]
    fn test_hidden_items_are_excluded() {
        let hidden = HIDDEN_ITEMS[0];
        let items = catalog(vec![raw(hidden, "P", "Item")]);
        let name_key = format!("{} Name", hidden);
        let table = locale(&[("P Name", "Ammo"), (name_key.as_str(), "Broken")]);

        let all = build_all_items(&items, &[], &table);
        assert!(!all.items.contains_key(hidden));
    }

    #[test]
    fn test_category_falls_back_to_grandparent() {
        let items = catalog(vec![
            raw("A", "P", "Item"),
            raw("P", "G", "Node"),
            raw("G", "", "Node"),
        ]);
        let table = locale(&[("G Name", "Weapons"), ("A Name", "Rifle")]);

        let all = build_all_items(&items, &[], &table);
        assert_eq!(all.items["A"].category, "Weapons");
    }

    #[test]
    fn test_no_category_excludes_item() {
        let items = catalog(vec![
            raw("A", "P", "Item"),
            raw("P", "G", "Node"),
            // parent missing from the catalog entirely
            raw("B", "missing", "Item"),
        ]);
        let table = locale(&[("A Name", "Rifle"), ("B Name", "Orphan")]);

        let all = build_all_items(&items, &[], &table);
        assert!(all.items.is_empty());
    }

    #[test]
    fn test_hidden_category_applies_to_grandparent_resolution() {
        let hidden = HIDDEN_CATEGORIES[0];
        let items = catalog(vec![
            raw("A", hidden, "Item"),
            raw(hidden, "G", "Node"),
            raw("G", "", "Node"),
        ]);
        let table = locale(&[("G Name", "Stuff"), ("A Name", "Thing")]);

        let all = build_all_items(&items, &[], &table);
        assert!(all.items.is_empty());
        assert!(all.categories.is_empty());
    }

    #[test]
    fn test_unusable_names_are_excluded() {
        let items = catalog(vec![
            raw("A", "P", "Item"),
            raw("B", "P", "Item"),
            raw("C", "P", "Item"),
        ]);
        let table = locale(&[
            ("P Name", "Ammo"),
            ("A Name", "old round DO_NOT_USE"),
            ("C Name", "Real round"),
        ]);

        let all = build_all_items(&items, &[], &table);
        assert!(!all.items.contains_key("A"));
        assert!(!all.items.contains_key("B"));
        assert!(all.items.contains_key("C"));
    }

    #[test]
    fn test_categories_are_distinct_and_sorted() {
        let items = catalog(vec![
            raw("A", "P2", "Item"),
            raw("B", "P1", "Item"),
            raw("C", "P2", "Item"),
            raw("D", "P3", "Item"),
        ]);
        let table = locale(&[
            ("P1 Name", "Medical"),
            ("P2 Name", "Ammo"),
            ("P3 Name", "Barter"),
            ("A Name", "a"),
            ("B Name", "b"),
            ("C Name", "c"),
            ("D Name", "d"),
        ]);

        let all = build_all_items(&items, &[], &table);
        assert_eq!(all.categories, vec!["Ammo", "Barter", "Medical"]);
        assert_eq!(all.items.len(), 4);
    }

    #[test]
    fn test_presets_are_copied_unfiltered() {
        let presets = vec![
            GlobalPreset {
                id: "p1".to_string(),
                encyclopedia: true,
            },
            GlobalPreset {
                id: "p2".to_string(),
                encyclopedia: false,
            },
        ];

        let all = build_all_items(&HashMap::new(), &presets, &LocaleTable::default());
        assert_eq!(
            all.global_presets,
            vec![
                ViewPreset {
                    id: "p1".to_string(),
                    encyclopedia: true
                },
                ViewPreset {
                    id: "p2".to_string(),
                    encyclopedia: false
                },
            ]
        );
    }

    #[test]
    fn test_custom_rules() {
        let items = catalog(vec![raw("A", "P", "Item"), raw("B", "Q", "Item")]);
        let table = locale(&[("P Name", "Ammo"), ("Q Name", "Keys"), ("A Name", "a"), ("B Name", "b")]);
        let rules = ExclusionRules {
            hidden_items: &["A"],
            hidden_categories: &["Q"],
        };

        let all = build_all_items_with(&items, &[], &table, &rules);
        assert!(all.items.is_empty());
    }
}
