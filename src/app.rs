//! Portfolio Frontend App
//!
//! Root component: theme context, skip link, and page selection.

use leptos::prelude::*;

use crate::context::ThemeContext;
use crate::error::AppError;
use crate::portfolio::PortfolioPage;
use crate::recipe::RecipePage;

/// Pages served by this frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Portfolio,
    Recipe,
}

impl Page {
    /// `/recipe`, `/recipe/` and `#/recipe` open the recipe, anything else the portfolio
    pub fn from_location(path: &str, hash: &str) -> Self {
        if path.trim_end_matches('/').ends_with("/recipe") || hash == "#/recipe" {
            Page::Recipe
        } else {
            Page::Portfolio
        }
    }
}

fn current_page() -> Result<Page, AppError> {
    let location = web_sys::window()
        .ok_or_else(|| AppError::Dom("window is not available".to_string()))?
        .location();
    Ok(Page::from_location(&location.pathname()?, &location.hash()?))
}

#[component]
pub fn App() -> impl IntoView {
    ThemeContext::provide();

    let page = current_page().unwrap_or_else(|err| {
        log::warn!("{}, showing the portfolio", err);
        Page::Portfolio
    });
    log::info!("rendering {:?} page", page);

    view! {
        <a href="#main-content" class="skip-to-content">"Skip to main content"</a>
        {match page {
            Page::Portfolio => view! { <PortfolioPage /> }.into_any(),
            Page::Recipe => view! { <RecipePage /> }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_routes() {
        assert_eq!(Page::from_location("/recipe", ""), Page::Recipe);
        assert_eq!(Page::from_location("/recipe/", ""), Page::Recipe);
        assert_eq!(Page::from_location("/site/recipe", ""), Page::Recipe);
        assert_eq!(Page::from_location("/", "#/recipe"), Page::Recipe);
    }

    #[test]
    fn test_everything_else_is_portfolio() {
        assert_eq!(Page::from_location("/", ""), Page::Portfolio);
        assert_eq!(Page::from_location("/", "#projects"), Page::Portfolio);
        assert_eq!(Page::from_location("/recipes", ""), Page::Portfolio);
    }
}
