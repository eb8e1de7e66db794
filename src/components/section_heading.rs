//! Gradient section heading used by every portfolio section.

use leptos::prelude::*;

#[component]
pub fn SectionHeading(id: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <h2 id=id class="section-heading gradient-text">{title}</h2>
    }
}
