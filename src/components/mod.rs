//! UI Components
//!
//! Reusable Leptos components.

mod theme_toggle;
mod theme_picker;
mod nav_bar;
mod section_heading;
mod skill_card;
mod project_card;
mod scale_selector;
mod ingredient_list;
mod review_card;
mod recipe_sidebar;

pub use theme_toggle::ThemeToggle;
pub use theme_picker::ThemePicker;
pub use nav_bar::NavBar;
pub use section_heading::SectionHeading;
pub use skill_card::SkillCard;
pub use project_card::ProjectCard;
pub use scale_selector::ScaleSelector;
pub use ingredient_list::IngredientSectionView;
pub use review_card::ReviewCard;
pub use recipe_sidebar::RecipeSidebar;
