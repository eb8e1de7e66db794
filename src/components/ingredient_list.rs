//! Ingredient List Components
//!
//! Checkable ingredient rows grouped by section. Amounts follow the
//! selected scale; lines without an amount are shown as written.

use leptos::prelude::*;

use crate::models::{Ingredient, IngredientSection};
use crate::quantity::format_amount;
use crate::store::{
    ingredient_id, store_is_checked, store_toggle_ingredient, use_recipe_store, RecipeStateStoreFields,
};

/// A single ingredient with its checkbox
#[component]
fn IngredientRow(id: u32, ingredient: &'static Ingredient) -> impl IntoView {
    let store = use_recipe_store();
    let checked = move || store_is_checked(&store, id);

    view! {
        <label class="ingredient-row">
            <input
                type="checkbox"
                class="ingredient-check"
                prop:checked=checked
                on:change=move |_| store_toggle_ingredient(&store, id)
            />
            <span class=move || if checked() { "ingredient-text checked" } else { "ingredient-text" }>
                {ingredient.amount.map(|amount| view! {
                    <span class="ingredient-amount">
                        {move || format!("{} ", format_amount(amount, store.scale().get().factor()))}
                    </span>
                })}
                {ingredient.text.as_str()}
            </span>
        </label>
    }
}

/// Titled group of ingredient rows
#[component]
pub fn IngredientSectionView(section_index: usize, section: &'static IngredientSection) -> impl IntoView {
    view! {
        <div class="ingredient-section">
            <h4 class="ingredient-section-title">{section.title.as_str()}</h4>
            <div class="ingredient-rows">
                {section.ingredients.iter().enumerate().map(|(index, ingredient)| view! {
                    <IngredientRow id=ingredient_id(section_index, index) ingredient=ingredient />
                }).collect_view()}
            </div>
        </div>
    }
}
