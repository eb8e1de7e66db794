//! Theme Toggle Component
//!
//! Light/dark mode switch shown in the navigation bar.

use leptos::prelude::*;

use crate::context::use_theme;
use crate::theme::ThemeMode;

/// Mode switch button; the icon shows the mode it switches to
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let is_dark = move || theme.mode.get() == ThemeMode::Dark;

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle light/dark mode"
            title=move || if is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            on:click=move |_| theme.toggle_mode()
        >
            {move || if is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
