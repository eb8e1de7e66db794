//! Navigation Bar Component
//!
//! Fixed top bar of the portfolio page: brand, section anchors, theme controls.

use leptos::prelude::*;

use super::{ThemePicker, ThemeToggle};

/// Section anchors (href, label)
const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[component]
pub fn NavBar(brand: &'static str) -> impl IntoView {
    view! {
        <nav class="nav-bar" role="navigation" aria-label="Main navigation">
            <div class="container nav-inner">
                <div class="nav-brand gradient-text">{brand}</div>
                <div class="nav-links">
                    {NAV_LINKS.iter().map(|(href, label)| view! {
                        <a href=*href class="nav-link">{*label}</a>
                    }).collect_view()}
                    <ThemePicker />
                    <ThemeToggle />
                </div>
            </div>
        </nav>
    }
}
