//! Theme Picker Component
//!
//! Swatch buttons for the palettes of the current mode.

use leptos::prelude::*;

use crate::context::use_theme;

#[component]
pub fn ThemePicker() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="theme-picker" role="group" aria-label="Color theme">
            {move || theme.available_themes().iter().map(|&name| {
                let palette = name.theme();
                let is_selected = move || theme.current.get() == name;
                view! {
                    <button
                        class=move || if is_selected() { "theme-swatch active" } else { "theme-swatch" }
                        style=format!("background: {};", palette.colors.gradient)
                        title=palette.display_name
                        aria-label=palette.display_name
                        aria-pressed=move || is_selected().to_string()
                        on:click=move |_| theme.set_theme(name)
                    ></button>
                }
            }).collect_view()}
        </div>
    }
}
