//! Recipe Page
//!
//! A single recipe with scalable, checkable ingredients. Scale and checks
//! live in a page-local store and reset on reload.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{IngredientSectionView, RecipeSidebar, ReviewCard, ScaleSelector};
use crate::content;
use crate::markdown::render_inline;
use crate::models::star_row;
use crate::store::RecipeState;

/// Inert header links
const HEADER_LINKS: &[&str] = &["Browse", "Categories", "Popular"];

#[component]
fn RecipeHeader() -> impl IntoView {
    view! {
        <header class="recipe-header">
            <nav class="container recipe-nav">
                <a href="/" class="recipe-brand">"🍴 Cookbook"</a>
                <div class="recipe-search">
                    <input type="text" placeholder="Search recipes, ingredients, or chefs..." />
                </div>
                <ul class="recipe-links">
                    {HEADER_LINKS.iter().map(|label| view! {
                        <li><a href="#">{*label}</a></li>
                    }).collect_view()}
                </ul>
                <div class="login-menu">
                    <button type="button" class="login-btn">"👤 Login ▾"</button>
                    <div class="login-dropdown">
                        <a href="#">"Sign In"</a>
                        <a href="#">"Register"</a>
                        <a href="#" class="accent">"+ Create Recipe"</a>
                    </div>
                </div>
            </nav>
        </header>
    }
}

#[component]
pub fn RecipePage() -> impl IntoView {
    provide_context(Store::new(RecipeState::default()));
    let recipe = content::recipe();

    view! {
        <div id="main-content" class="recipe-page">
            <RecipeHeader />

            <div class="recipe-hero">
                <div class="container">
                    <h1 class="recipe-title">{recipe.title.as_str()}</h1>
                    <p class="recipe-summary">{recipe.summary.as_str()}</p>
                    <div class="chef">
                        <img src=recipe.chef.avatar.as_str() alt=recipe.chef.name.as_str() width="48" height="48" />
                        <div>
                            <div class="chef-name">{recipe.chef.name.as_str()}</div>
                            <div class="chef-published">{recipe.chef.published.as_str()}</div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="container recipe-layout">
                <div class="recipe-main">
                    <img class="recipe-image" src=recipe.image.as_str() alt=recipe.title.as_str() />

                    <div class="stat-grid">
                        {recipe.stats.iter().map(|stat| view! {
                            <div class="card stat-card">
                                <div class="stat-icon">{stat.icon.as_str()}</div>
                                <div class="stat-value">{stat.value.as_str()}</div>
                                <div class="stat-label">{stat.label.as_str()}</div>
                            </div>
                        }).collect_view()}
                    </div>

                    <div class="tag-row">
                        {recipe.tags.iter().map(|tag| view! {
                            <span class="recipe-tag">{tag.as_str()}</span>
                        }).collect_view()}
                    </div>

                    <h2 class="recipe-heading">"☰ Ingredients"</h2>
                    <div class="card ingredients-card">
                        <ScaleSelector />
                        {recipe.sections.iter().enumerate().map(|(index, section)| view! {
                            <IngredientSectionView section_index=index section=section />
                        }).collect_view()}
                    </div>

                    <h2 class="recipe-heading">"✓ Instructions"</h2>
                    <ol class="step-list">
                        {recipe.steps.iter().map(|step| view! {
                            <li class="card step" inner_html=render_inline(step)></li>
                        }).collect_view()}
                    </ol>

                    <div class="tips">
                        <h3 class="card-title">"💡 Chef's Tips & Notes"</h3>
                        <ul>
                            {recipe.tips.iter().map(|tip| view! {
                                <li inner_html=render_inline(tip)></li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <h2 class="recipe-heading">"💬 Reviews & Comments"</h2>
                    <div class="review-list">
                        {recipe.reviews.iter().map(|review| view! {
                            <ReviewCard review=review />
                        }).collect_view()}
                    </div>

                    <h2 class="recipe-heading">"♥ You Might Also Like"</h2>
                    <div class="related-grid">
                        {recipe.related.iter().map(|related| view! {
                            <div class="card related-card">
                                <img src=related.image.as_str() alt=related.title.as_str() loading="lazy" />
                                <div class="related-body">
                                    <div class="related-title">{related.title.as_str()}</div>
                                    <div class="related-meta">
                                        {format!("{} min • {} • {}", related.minutes, related.difficulty, star_row(related.rating))}
                                    </div>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                <RecipeSidebar recipe=recipe />
            </div>
        </div>
    }
}
