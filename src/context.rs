//! Theme Context
//!
//! Active palette and light/dark mode, provided via Leptos Context API.

use leptos::prelude::*;
use leptos_theme_root::{storage_get, use_persisted, use_root_class, use_root_properties};

use crate::theme::{initial_theme, reconcile, themes_for_mode, ThemeMode, ThemeName, DEFAULT_MODE};

/// localStorage key holding the palette name
pub const THEME_STORAGE_KEY: &str = "advanced-theme";
/// localStorage key holding "light" or "dark"
pub const MODE_STORAGE_KEY: &str = "portfolio-theme";

const MODE_CLASSES: &[&str] = &["light", "dark"];

/// Theme signals provided via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Active palette - read
    pub current: ReadSignal<ThemeName>,
    /// Active palette - write
    set_current: WriteSignal<ThemeName>,
    /// Light/dark mode - read
    pub mode: ReadSignal<ThemeMode>,
    /// Light/dark mode - write
    set_mode: WriteSignal<ThemeMode>,
}

impl ThemeContext {
    /// Restore saved preferences, wire root effects, and provide the context
    pub fn provide() -> Self {
        let (theme, mode) = restore_preferences(
            storage_get(MODE_STORAGE_KEY).as_deref(),
            storage_get(THEME_STORAGE_KEY).as_deref(),
        );
        log::debug!("restored theme {} in {} mode", theme, mode.as_str());

        let (current, set_current) = signal(theme);
        let (mode, set_mode) = signal(mode);

        // Keep the palette within the active mode
        Effect::new(move |_| {
            let name = current.get();
            let reconciled = reconcile(name, mode.get());
            if reconciled != name {
                log::debug!("{} does not fit the mode, switching to {}", name, reconciled);
                set_current.set(reconciled);
            }
        });

        use_root_properties(move || current.get().theme().css_vars());
        use_root_class(move || mode.get().as_str(), MODE_CLASSES);
        use_persisted(THEME_STORAGE_KEY, move || current.get().to_string());
        use_persisted(MODE_STORAGE_KEY, move || mode.get().as_str().to_string());

        let ctx = Self {
            current,
            set_current,
            mode,
            set_mode,
        };
        provide_context(ctx);
        ctx
    }

    pub fn set_theme(&self, name: ThemeName) {
        log::debug!("theme set to {}", name);
        self.set_current.set(name);
    }

    /// Flip between light and dark
    pub fn toggle_mode(&self) {
        self.set_mode.update(|mode| *mode = mode.toggled());
    }

    /// Palettes offered for the current mode
    pub fn available_themes(&self) -> &'static [ThemeName] {
        themes_for_mode(self.mode.get())
    }
}

/// Palette and mode for the first paint, already consistent with each other
fn restore_preferences(saved_mode: Option<&str>, saved_theme: Option<&str>) -> (ThemeName, ThemeMode) {
    let mode = saved_mode
        .and_then(|saved| match saved.parse::<ThemeMode>() {
            Ok(mode) => Some(mode),
            Err(err) => {
                log::warn!("{}, using {}", err, DEFAULT_MODE.as_str());
                None
            }
        })
        .unwrap_or(DEFAULT_MODE);
    (reconcile(initial_theme(saved_theme, mode), mode), mode)
}

/// Get the theme context
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_defaults_to_dark() {
        assert_eq!(restore_preferences(None, None), (ThemeName::Midnight, ThemeMode::Dark));
    }

    #[test]
    fn test_restore_keeps_matching_palette() {
        assert_eq!(
            restore_preferences(Some("light"), Some("sage")),
            (ThemeName::Sage, ThemeMode::Light)
        );
    }

    #[test]
    fn test_restore_reconciles_palette_from_other_mode() {
        assert_eq!(
            restore_preferences(Some("dark"), Some("sage")),
            (ThemeName::Midnight, ThemeMode::Dark)
        );
        assert_eq!(
            restore_preferences(Some("light"), Some("slate")),
            (ThemeName::Ocean, ThemeMode::Light)
        );
    }

    #[test]
    fn test_restore_ignores_invalid_saved_values() {
        assert_eq!(
            restore_preferences(Some("sepia"), Some("neon")),
            (ThemeName::Midnight, ThemeMode::Dark)
        );
    }
}
