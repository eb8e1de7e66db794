//! Recipe Sidebar Component
//!
//! Action buttons, overall rating and nutrition facts. The actions are
//! presentational only.

use leptos::prelude::*;

use crate::models::{star_row, Recipe};

/// (icon, label, primary)
const ACTIONS: &[(&str, &str, bool)] = &[
    ("♥", "Save Recipe", true),
    ("↗", "Share", false),
    ("⎙", "Print", false),
    ("🛒", "Add to List", true),
];

#[component]
pub fn RecipeSidebar(recipe: &'static Recipe) -> impl IntoView {
    let rating = &recipe.rating;

    view! {
        <aside class="recipe-sidebar">
            <div class="card sidebar-actions">
                {ACTIONS.iter().map(|(icon, label, primary)| view! {
                    <button
                        type="button"
                        class={if *primary { "btn-block btn-orange" } else { "btn-block btn-muted" }}
                    >
                        {format!("{} {}", icon, label)}
                    </button>
                }).collect_view()}
            </div>

            <div class="card">
                <div class="stars stars-large">{star_row(rating.score.round() as u8)}</div>
                <div class="rating-text">
                    {format!("{:.1} out of 5 ({} reviews)", rating.score, rating.count)}
                </div>
                <button type="button" class="btn-block btn-orange">"📷 Rate This Recipe"</button>
            </div>

            <div class="card">
                <h3 class="card-title">"Nutrition Per Serving"</h3>
                <div class="nutrition-grid">
                    {recipe.nutrition.iter().map(|fact| view! {
                        <div class="nutrition-cell">
                            <div class="nutrition-value">{fact.value.as_str()}</div>
                            <div class="nutrition-label">{fact.label.as_str()}</div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </aside>
    }
}
