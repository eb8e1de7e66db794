//! Recipe Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Nothing here outlives the page: reloading resets scale and checks.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::quantity::Scale;

/// Ingredient ids are spaced per section: 0.., 100.., 200..
pub const SECTION_ID_STRIDE: u32 = 100;

/// Transient recipe page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct RecipeState {
    /// Selected scale factor
    pub scale: Scale,
    /// Ingredients marked as done
    pub checked: HashSet<u32>,
}

/// Type alias for the store
pub type RecipeStore = Store<RecipeState>;

/// Get the recipe store from context
pub fn use_recipe_store() -> RecipeStore {
    expect_context::<RecipeStore>()
}

/// Identifier of an ingredient row
pub fn ingredient_id(section: usize, index: usize) -> u32 {
    section as u32 * SECTION_ID_STRIDE + index as u32
}

/// Check an unchecked ingredient, uncheck a checked one
pub fn toggle_checked(checked: &mut HashSet<u32>, id: u32) {
    if !checked.remove(&id) {
        checked.insert(id);
    }
}

// ========================
// Store Helper Functions
// ========================

pub fn store_toggle_ingredient(store: &RecipeStore, id: u32) {
    toggle_checked(&mut store.checked().write(), id);
}

pub fn store_set_scale(store: &RecipeStore, scale: Scale) {
    log::debug!("scale set to {}", scale.label());
    *store.scale().write() = scale;
}

pub fn store_is_checked(store: &RecipeStore, id: u32) -> bool {
    store.checked().read().contains(&id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut checked = HashSet::new();
        toggle_checked(&mut checked, 3);
        assert!(checked.contains(&3));
        toggle_checked(&mut checked, 3);
        assert!(checked.is_empty());
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut checked = HashSet::new();
        toggle_checked(&mut checked, 0);
        toggle_checked(&mut checked, 100);
        toggle_checked(&mut checked, 0);
        assert_eq!(checked, HashSet::from([100]));
    }

    #[test]
    fn test_ingredient_ids_are_spaced_by_section() {
        assert_eq!(ingredient_id(0, 2), 2);
        assert_eq!(ingredient_id(1, 0), 100);
        assert_eq!(ingredient_id(2, 1), 201);
    }

    #[test]
    fn test_default_state() {
        let state = RecipeState::default();
        assert_eq!(state.scale, Scale::One);
        assert!(state.checked.is_empty());
    }
}
