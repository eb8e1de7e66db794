//! Content Models
//!
//! Shapes of the embedded site content under `content/`.

use serde::Deserialize;

// ========================
// Portfolio
// ========================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Portfolio {
    pub owner: Owner,
    pub about: Vec<String>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub contact: Contact,
    pub footer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Owner {
    pub name: String,
    pub tagline: String,
    pub summary: String,
}

/// Accent used for a skill card icon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Primary,
    Secondary,
}

impl Accent {
    pub fn css_var(self) -> &'static str {
        match self {
            Accent::Primary => "var(--color-primary)",
            Accent::Secondary => "var(--color-secondary)",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub icon: String,
    #[serde(default)]
    pub accent: Accent,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Inline Markdown
    pub long_description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub live: String,
    pub image: String,
    pub demo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub blurb: String,
    pub email: String,
    pub linkedin: String,
}

// ========================
// Recipe
// ========================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub summary: String,
    pub chef: Chef,
    pub image: String,
    pub stats: Vec<RecipeStat>,
    pub tags: Vec<String>,
    pub sections: Vec<IngredientSection>,
    /// Inline Markdown, one entry per step
    pub steps: Vec<String>,
    /// Inline Markdown
    pub tips: Vec<String>,
    pub reviews: Vec<Review>,
    pub related: Vec<RelatedRecipe>,
    pub rating: Rating,
    pub nutrition: Vec<NutritionFact>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Chef {
    pub name: String,
    pub avatar: String,
    pub published: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecipeStat {
    pub icon: String,
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IngredientSection {
    pub title: String,
    pub ingredients: Vec<Ingredient>,
}

/// One ingredient line. Lines without an amount are never scaled.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub amount: Option<f64>,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Review {
    pub author: String,
    pub rating: u8,
    pub when: String,
    pub body: String,
}

impl Review {
    pub fn initial(&self) -> String {
        self.author.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RelatedRecipe {
    pub title: String,
    pub image: String,
    pub minutes: u32,
    pub difficulty: String,
    pub rating: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Rating {
    pub score: f32,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NutritionFact {
    pub value: String,
    pub label: String,
}

/// Filled and empty stars for a 0-5 rating
pub fn star_row(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_row() {
        assert_eq!(star_row(5), "★★★★★");
        assert_eq!(star_row(4), "★★★★☆");
        assert_eq!(star_row(0), "☆☆☆☆☆");
        assert_eq!(star_row(9), "★★★★★");
    }

    #[test]
    fn test_ingredient_amount_is_optional() {
        let ingredient: Ingredient = serde_json::from_str(r#"{"text": "Sesame seeds"}"#).unwrap();
        assert_eq!(ingredient.amount, None);

        let ingredient: Ingredient = serde_json::from_str(r#"{"amount": 0.5, "text": "cup honey"}"#).unwrap();
        assert_eq!(ingredient.amount, Some(0.5));
    }

    #[test]
    fn test_review_initial() {
        let review = Review {
            author: "maria Rodriguez".to_string(),
            ..Default::default()
        };
        assert_eq!(review.initial(), "M");
        assert_eq!(Review::default().initial(), "");
    }
}
