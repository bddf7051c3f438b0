//! Theme configuration for the desktop app

use std::process::Command;
use std::sync::OnceLock;

use quire_core::models::ThemeMode;

/// System dark mode preference, detected once
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

/// Resolve the configured mode to a concrete theme
#[must_use]
pub fn resolve_theme(mode: ThemeMode) -> ResolvedTheme {
    resolve_theme_with(mode, is_system_dark_mode)
}

fn resolve_theme_with(mode: ThemeMode, system_is_dark: impl FnOnce() -> bool) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::System if system_is_dark() => ResolvedTheme::Dark,
        ThemeMode::System => ResolvedTheme::Light,
    }
}

#[must_use]
pub fn is_system_dark_mode() -> bool {
    *SYSTEM_DARK_MODE.get_or_init(|| {
        let is_dark = detect_system_dark_mode();
        tracing::debug!(
            "System theme detected: {}",
            if is_dark { "dark" } else { "light" }
        );
        is_dark
    })
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode() -> bool {
    command_output("defaults", &["read", "-g", "AppleInterfaceStyle"])
        .is_some_and(|style| style.trim().eq_ignore_ascii_case("dark"))
}

#[cfg(target_os = "windows")]
fn detect_system_dark_mode() -> bool {
    // AppsUseLightTheme is 0x0 in dark mode
    command_output(
        "reg",
        &[
            "query",
            r"HKCU\SOFTWARE\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ],
    )
    .is_some_and(|value| value.contains("0x0"))
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn detect_system_dark_mode() -> bool {
    if let Ok(theme) = std::env::var("GTK_THEME") {
        return theme.to_lowercase().contains("dark");
    }
    command_output(
        "gsettings",
        &["get", "org.gnome.desktop.interface", "color-scheme"],
    )
    .is_some_and(|scheme| scheme.contains("dark"))
}

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    match Command::new(program).args(args).output() {
        Ok(output) => Some(String::from_utf8_lossy(&output.stdout).into_owned()),
        Err(error) => {
            tracing::warn!("Theme detection via {} failed: {}", program, error);
            None
        }
    }
}

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_card: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub danger: &'static str,
    pub overlay: &'static str,
}

pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#fbfaf7",
    bg_secondary: "#f1eee7",
    bg_card: "#ffffff",
    text_primary: "#22201c",
    text_secondary: "#5c574e",
    text_muted: "#958f84",
    border: "#e2ddd2",
    accent: "#b4552d",
    accent_text: "#ffffff",
    danger: "#c0392b",
    overlay: "rgba(20, 18, 15, 0.45)",
};

pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#1c1b19",
    bg_secondary: "#252420",
    bg_card: "#2c2a26",
    text_primary: "#ece8e1",
    text_secondary: "#b3ada2",
    text_muted: "#7d776c",
    border: "#3b3833",
    accent: "#e08a5f",
    accent_text: "#1c1b19",
    danger: "#ef6f5e",
    overlay: "rgba(0, 0, 0, 0.6)",
};

impl ResolvedTheme {
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn explicit_modes_ignore_system_preference() {
        assert_eq!(
            resolve_theme_with(ThemeMode::Light, || true),
            ResolvedTheme::Light
        );
        assert_eq!(
            resolve_theme_with(ThemeMode::Dark, || false),
            ResolvedTheme::Dark
        );
    }

    #[test]
    fn system_mode_follows_detection() {
        assert_eq!(
            resolve_theme_with(ThemeMode::System, || true),
            ResolvedTheme::Dark
        );
        assert_eq!(
            resolve_theme_with(ThemeMode::System, || false),
            ResolvedTheme::Light
        );
    }

    #[test]
    fn palettes_differ_per_theme() {
        assert_ne!(
            ResolvedTheme::Light.palette().bg_primary,
            ResolvedTheme::Dark.palette().bg_primary
        );
    }
}
