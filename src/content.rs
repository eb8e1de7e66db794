//! Embedded Site Content
//!
//! Copy lives in `content/*.json` and is compiled into the binary.
//! Parsed once on first use; a broken fixture logs an error and renders
//! empty content instead of panicking.

use std::sync::OnceLock;

use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::models::{Portfolio, Recipe};

const PORTFOLIO_JSON: &str = include_str!("../content/portfolio.json");
const RECIPE_JSON: &str = include_str!("../content/recipe.json");

static PORTFOLIO: OnceLock<Portfolio> = OnceLock::new();
static RECIPE: OnceLock<Recipe> = OnceLock::new();

fn parse_fixture<T: DeserializeOwned>(name: &'static str, json: &str) -> Result<T, AppError> {
    serde_json::from_str(json).map_err(|source| AppError::Content { name, source })
}

fn load_or_default<T: DeserializeOwned + Default>(name: &'static str, json: &str) -> T {
    parse_fixture(name, json).unwrap_or_else(|err| {
        log::error!("{}", err);
        T::default()
    })
}

pub fn portfolio() -> &'static Portfolio {
    PORTFOLIO.get_or_init(|| load_or_default("portfolio", PORTFOLIO_JSON))
}

pub fn recipe() -> &'static Recipe {
    RECIPE.get_or_init(|| load_or_default("recipe", RECIPE_JSON))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::quantity::{format_amount, Scale};
    use crate::store::ingredient_id;

    #[test]
    fn test_portfolio_fixture_parses() {
        let portfolio: Portfolio = parse_fixture("portfolio", PORTFOLIO_JSON).unwrap();
        assert!(!portfolio.owner.name.is_empty());
        assert_eq!(portfolio.skills.len(), 4);
        assert!(!portfolio.projects.is_empty());
    }

    #[test]
    fn test_recipe_fixture_parses() {
        let recipe: Recipe = parse_fixture("recipe", RECIPE_JSON).unwrap();
        assert_eq!(recipe.sections.len(), 3);
        assert!(recipe.reviews.iter().all(|r| r.rating <= 5));
        assert!(recipe
            .sections
            .iter()
            .flat_map(|s| &s.ingredients)
            .filter_map(|i| i.amount)
            .all(|amount| amount > 0.0));
    }

    #[test]
    fn test_ingredient_ids_unique_across_sections() {
        let recipe = recipe();
        let mut seen = HashSet::new();
        for (section, group) in recipe.sections.iter().enumerate() {
            for index in 0..group.ingredients.len() {
                assert!(seen.insert(ingredient_id(section, index)));
            }
        }
    }

    #[test]
    fn test_honey_scales_through_fractions() {
        let honey = recipe().sections[1].ingredients[0].amount.unwrap();
        let shown: Vec<String> = Scale::ALL.iter().map(|s| format_amount(honey, s.factor())).collect();
        assert_eq!(shown, vec!["0.17", "1/3", "0.67", "1"]);
    }

    #[test]
    fn test_broken_fixture_is_reported() {
        let result: Result<Recipe, AppError> = parse_fixture("recipe", "{ not json");
        assert!(matches!(result, Err(AppError::Content { name: "recipe", .. })));

        let fallback: Recipe = load_or_default("recipe", "[]");
        assert_eq!(fallback, Recipe::default());
    }
}
