//! Save-slot discovery

use std::collections::BTreeSet;

use crate::core::types::Result;

use super::store::SlotStore;
use super::HEIGHTS_SUFFIX;

/// Reserved slot name meaning "no persisted override, use the compiled-in
/// default template". Never written to the store by the core.
pub const DEFAULT_SLOT: &str = "Default";

/// Enumerate persisted slot names by scanning elevation artifacts.
///
/// A slot is listed as soon as its elevation artifact exists; absent weight
/// or object artifacts are treated as empty on load. The reserved default
/// name is excluded here; menu-context listings add it back explicitly via
/// [`list_slots_with_default`].
pub fn list_slots(store: &dyn SlotStore) -> Result<Vec<String>> {
    let mut slots = BTreeSet::new();
    for name in store.list_names(HEIGHTS_SUFFIX)? {
        // Strip the suffix exactly once; the remainder is the slot name even
        // when it itself ends in the suffix
        if let Some(base) = name.strip_suffix(HEIGHTS_SUFFIX) {
            if !base.is_empty() && base != DEFAULT_SLOT {
                slots.insert(base.to_string());
            }
        }
    }
    Ok(slots.into_iter().collect())
}

/// Slot listing for menu display: the reserved default first, then every
/// persisted slot in sorted order
pub fn list_slots_with_default(store: &dyn SlotStore) -> Result<Vec<String>> {
    let mut slots = list_slots(store)?;
    slots.insert(0, DEFAULT_SLOT.to_string());
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::store::MemStore;

    #[test]
    fn test_lists_slots_from_elevation_artifacts() {
        let mut store = MemStore::new();
        store.write_all("Alpha_heights.json", b"{}").unwrap();
        store.write_all("Beta_heights.json", b"{}").unwrap();
        // Weight/object artifacts alone never define a slot
        store.write_all("Gamma_textures.json", b"{}").unwrap();
        store.write_all("Gamma_objects.json", b"{}").unwrap();

        assert_eq!(list_slots(&store).unwrap(), vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_listing_is_sorted_and_deduplicated() {
        let mut store = MemStore::new();
        store.write_all("Zeta_heights.json", b"{}").unwrap();
        store.write_all("Alpha_heights.json", b"{}").unwrap();
        assert_eq!(list_slots(&store).unwrap(), vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn test_suffix_stripped_exactly_once() {
        let mut store = MemStore::new();
        // A slot whose own name ends in the artifact suffix
        store
            .write_all("My_heights.json_heights.json", b"{}")
            .unwrap();
        assert_eq!(list_slots(&store).unwrap(), vec!["My_heights.json"]);
    }

    #[test]
    fn test_reserved_name_excluded_from_scan() {
        let mut store = MemStore::new();
        store.write_all("Default_heights.json", b"{}").unwrap();
        store.write_all("Alpha_heights.json", b"{}").unwrap();
        assert_eq!(list_slots(&store).unwrap(), vec!["Alpha"]);
    }

    #[test]
    fn test_menu_listing_prepends_default() {
        let mut store = MemStore::new();
        store.write_all("Alpha_heights.json", b"{}").unwrap();
        store.write_all("Beta_heights.json", b"{}").unwrap();
        assert_eq!(
            list_slots_with_default(&store).unwrap(),
            vec!["Default", "Alpha", "Beta"]
        );
    }

    #[test]
    fn test_empty_store_menu_listing() {
        let store = MemStore::new();
        assert_eq!(list_slots_with_default(&store).unwrap(), vec!["Default"]);
    }
}
