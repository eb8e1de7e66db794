//! Scale Selector Component
//!
//! Buttons for the recipe scale factors.

use leptos::prelude::*;

use crate::quantity::Scale;
use crate::store::{store_set_scale, use_recipe_store, RecipeStateStoreFields};

#[component]
pub fn ScaleSelector() -> impl IntoView {
    let store = use_recipe_store();

    view! {
        <div class="scale-selector">
            <span class="scale-label">"Scale Recipe:"</span>
            <div class="scale-buttons">
                {Scale::ALL.iter().map(|&scale| {
                    let is_selected = move || store.scale().get() == scale;
                    view! {
                        <button
                            class=move || if is_selected() { "scale-btn active" } else { "scale-btn" }
                            on:click=move |_| store_set_scale(&store, scale)
                        >
                            {scale.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
