//! Theme Registry
//!
//! Four palettes, two per mode. Each palette is written to the document root
//! as CSS custom properties; stylesheets only ever reference the variables.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(AppError::UnknownMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeName {
    Ocean,
    Sage,
    Midnight,
    Slate,
}

impl ThemeName {
    pub const ALL: [ThemeName; 4] = [ThemeName::Ocean, ThemeName::Sage, ThemeName::Midnight, ThemeName::Slate];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Ocean => "ocean",
            ThemeName::Sage => "sage",
            ThemeName::Midnight => "midnight",
            ThemeName::Slate => "slate",
        }
    }

    pub fn theme(self) -> &'static Theme {
        match self {
            ThemeName::Ocean => &OCEAN,
            ThemeName::Sage => &SAGE,
            ThemeName::Midnight => &MIDNIGHT,
            ThemeName::Slate => &SLATE,
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| AppError::UnknownTheme(s.to_string()))
    }
}

/// Semantic color tokens of one palette
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    // Base
    pub background: &'static str,
    pub surface: &'static str,
    pub surface_hover: &'static str,
    pub border: &'static str,
    pub border_subtle: &'static str,

    // Text
    pub text: &'static str,
    pub text_muted: &'static str,
    pub text_subtle: &'static str,

    // Accents
    pub primary: &'static str,
    pub primary_hover: &'static str,
    pub primary_text: &'static str,
    pub secondary: &'static str,
    pub secondary_hover: &'static str,
    pub secondary_text: &'static str,

    // Status
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,

    // Effects
    pub gradient: &'static str,
    pub shadow: &'static str,
    pub glow: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: ThemeName,
    pub display_name: &'static str,
    pub mode: ThemeMode,
    pub colors: ThemeColors,
}

impl Theme {
    /// CSS custom property name/value pairs for the document root
    pub fn css_vars(&self) -> Vec<(&'static str, &'static str)> {
        let c = &self.colors;
        vec![
            ("--color-background", c.background),
            ("--color-surface", c.surface),
            ("--color-surface-hover", c.surface_hover),
            ("--color-border", c.border),
            ("--color-border-subtle", c.border_subtle),
            ("--color-text", c.text),
            ("--color-text-muted", c.text_muted),
            ("--color-text-subtle", c.text_subtle),
            ("--color-primary", c.primary),
            ("--color-primary-hover", c.primary_hover),
            ("--color-primary-text", c.primary_text),
            ("--color-secondary", c.secondary),
            ("--color-secondary-hover", c.secondary_hover),
            ("--color-secondary-text", c.secondary_text),
            ("--color-success", c.success),
            ("--color-warning", c.warning),
            ("--color-error", c.error),
            ("--gradient", c.gradient),
            ("--shadow", c.shadow),
            ("--glow", c.glow),
        ]
    }
}

pub const DEFAULT_THEME: ThemeName = ThemeName::Ocean;
pub const DEFAULT_DARK_THEME: ThemeName = ThemeName::Midnight;
pub const DEFAULT_MODE: ThemeMode = ThemeMode::Dark;

pub const LIGHT_THEMES: &[ThemeName] = &[ThemeName::Ocean, ThemeName::Sage];
pub const DARK_THEMES: &[ThemeName] = &[ThemeName::Midnight, ThemeName::Slate];

pub fn default_for_mode(mode: ThemeMode) -> ThemeName {
    match mode {
        ThemeMode::Light => DEFAULT_THEME,
        ThemeMode::Dark => DEFAULT_DARK_THEME,
    }
}

pub fn themes_for_mode(mode: ThemeMode) -> &'static [ThemeName] {
    match mode {
        ThemeMode::Light => LIGHT_THEMES,
        ThemeMode::Dark => DARK_THEMES,
    }
}

/// Palette to start with: a valid saved name, otherwise the mode default
pub fn initial_theme(saved: Option<&str>, mode: ThemeMode) -> ThemeName {
    let fallback = default_for_mode(mode);
    match saved.map(str::parse::<ThemeName>) {
        Some(Ok(name)) => name,
        Some(Err(err)) => {
            log::warn!("{}, using {}", err, fallback);
            fallback
        }
        None => fallback,
    }
}

/// Swap a palette that belongs to the other mode for the mode default
pub fn reconcile(name: ThemeName, mode: ThemeMode) -> ThemeName {
    if name.theme().mode == mode {
        name
    } else {
        default_for_mode(mode)
    }
}

/// Professional blue palette
pub static OCEAN: Theme = Theme {
    name: ThemeName::Ocean,
    display_name: "Ocean",
    mode: ThemeMode::Light,
    colors: ThemeColors {
        background: "#FFFFFF",
        surface: "#F8FAFC",
        surface_hover: "#F1F5F9",
        border: "#E2E8F0",
        border_subtle: "#F1F5F9",
        text: "#0F172A",
        text_muted: "#475569",
        text_subtle: "#64748B",
        primary: "#0EA5E9",
        primary_hover: "#0284C7",
        primary_text: "#FFFFFF",
        secondary: "#6366F1",
        secondary_hover: "#4F46E5",
        secondary_text: "#FFFFFF",
        success: "#10B981",
        warning: "#F59E0B",
        error: "#EF4444",
        gradient: "linear-gradient(135deg, #0EA5E9 0%, #6366F1 100%)",
        shadow: "rgba(15, 23, 42, 0.1)",
        glow: "rgba(14, 165, 233, 0.2)",
    },
};

/// Warm earthy palette with green accents
pub static SAGE: Theme = Theme {
    name: ThemeName::Sage,
    display_name: "Sage",
    mode: ThemeMode::Light,
    colors: ThemeColors {
        background: "#FEFEFE",
        surface: "#F7F8F6",
        surface_hover: "#EEF0EC",
        border: "#E1E4DD",
        border_subtle: "#EEF0EC",
        text: "#1C1E1A",
        text_muted: "#4A4F45",
        text_subtle: "#6B7265",
        primary: "#059669",
        primary_hover: "#047857",
        primary_text: "#FFFFFF",
        secondary: "#7C3AED",
        secondary_hover: "#6D28D9",
        secondary_text: "#FFFFFF",
        success: "#10B981",
        warning: "#F59E0B",
        error: "#DC2626",
        gradient: "linear-gradient(135deg, #059669 0%, #7C3AED 100%)",
        shadow: "rgba(28, 30, 26, 0.08)",
        glow: "rgba(5, 150, 105, 0.2)",
    },
};

/// Deep blues with vibrant accents
pub static MIDNIGHT: Theme = Theme {
    name: ThemeName::Midnight,
    display_name: "Midnight",
    mode: ThemeMode::Dark,
    colors: ThemeColors {
        background: "#0A0E1A",
        surface: "#131825",
        surface_hover: "#1A2235",
        border: "#2D3548",
        border_subtle: "#1A2235",
        text: "#F1F5F9",
        text_muted: "#CBD5E1",
        text_subtle: "#94A3B8",
        primary: "#38BDF8",
        primary_hover: "#0EA5E9",
        primary_text: "#0F172A",
        secondary: "#818CF8",
        secondary_hover: "#6366F1",
        secondary_text: "#F1F5F9",
        success: "#34D399",
        warning: "#FBBF24",
        error: "#F87171",
        gradient: "linear-gradient(135deg, #38BDF8 0%, #818CF8 100%)",
        shadow: "rgba(0, 0, 0, 0.3)",
        glow: "rgba(56, 189, 248, 0.3)",
    },
};

/// Neutral grays with purple accents
pub static SLATE: Theme = Theme {
    name: ThemeName::Slate,
    display_name: "Slate",
    mode: ThemeMode::Dark,
    colors: ThemeColors {
        background: "#0F172A",
        surface: "#1E293B",
        surface_hover: "#334155",
        border: "#475569",
        border_subtle: "#334155",
        text: "#F8FAFC",
        text_muted: "#E2E8F0",
        text_subtle: "#CBD5E1",
        primary: "#A78BFA",
        primary_hover: "#8B5CF6",
        primary_text: "#F8FAFC",
        secondary: "#F472B6",
        secondary_hover: "#EC4899",
        secondary_text: "#F8FAFC",
        success: "#4ADE80",
        warning: "#FBBF24",
        error: "#FB7185",
        gradient: "linear-gradient(135deg, #A78BFA 0%, #F472B6 100%)",
        shadow: "rgba(0, 0, 0, 0.4)",
        glow: "rgba(167, 139, 250, 0.3)",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_palettes_per_mode() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let names = themes_for_mode(mode);
            assert_eq!(names.len(), 2);
            assert!(names.iter().all(|name| name.theme().mode == mode));
        }
    }

    #[test]
    fn test_registry_entries_match_their_names() {
        for name in ThemeName::ALL {
            assert_eq!(name.theme().name, name);
            assert_eq!(name.theme().display_name.to_lowercase(), name.as_str());
        }
    }

    #[test]
    fn test_css_vars_cover_every_token() {
        let vars = MIDNIGHT.css_vars();
        assert_eq!(vars.len(), 20);
        assert!(vars.iter().all(|(name, value)| name.starts_with("--") && !value.is_empty()));
        assert!(vars.contains(&("--color-primary", "#38BDF8")));
        assert!(vars.contains(&("--gradient", "linear-gradient(135deg, #38BDF8 0%, #818CF8 100%)")));

        let mut names: Vec<_> = vars.iter().map(|(name, _)| *name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 20);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("sage".parse::<ThemeName>().unwrap(), ThemeName::Sage);
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!(matches!("Sage".parse::<ThemeName>(), Err(AppError::UnknownTheme(_))));
        assert!(matches!("dim".parse::<ThemeMode>(), Err(AppError::UnknownMode(_))));
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        assert_eq!(initial_theme(Some("neon"), ThemeMode::Light), DEFAULT_THEME);
        assert_eq!(initial_theme(Some("neon"), ThemeMode::Dark), DEFAULT_DARK_THEME);
    }

    #[test]
    fn test_initial_theme() {
        assert_eq!(initial_theme(Some("slate"), ThemeMode::Light), ThemeName::Slate);
        assert_eq!(initial_theme(Some("bogus"), ThemeMode::Dark), ThemeName::Midnight);
        assert_eq!(initial_theme(None, ThemeMode::Light), ThemeName::Ocean);
    }

    #[test]
    fn test_reconcile_switches_mismatched_palette() {
        assert_eq!(reconcile(ThemeName::Sage, ThemeMode::Dark), ThemeName::Midnight);
        assert_eq!(reconcile(ThemeName::Slate, ThemeMode::Light), ThemeName::Ocean);
        assert_eq!(reconcile(ThemeName::Slate, ThemeMode::Dark), ThemeName::Slate);
        assert_eq!(reconcile(ThemeName::Sage, ThemeMode::Light), ThemeName::Sage);
    }

    #[test]
    fn test_mode_toggle_round_trips() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }
}
