//! Skill Card Component

use leptos::prelude::*;

use crate::models::SkillGroup;

/// One skill group with its icon and chips
#[component]
pub fn SkillCard(group: &'static SkillGroup) -> impl IntoView {
    view! {
        <div class="skill-card">
            <div class="skill-icon" style=format!("color: {};", group.accent.css_var())>
                {group.icon.as_str()}
            </div>
            <h3 class="skill-title">{group.title.as_str()}</h3>
            <div class="chip-row">
                {group.items.iter().map(|skill| view! {
                    <span class="chip">{skill.as_str()}</span>
                }).collect_view()}
            </div>
        </div>
    }
}
