use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
};

use color_eyre::eyre::{eyre, Result};
use serde::{Deserialize, Serialize};
use strum::Display;
use tokio::sync::watch;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph shown on the navigation bar toggle.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "☀",
            Theme::Dark => "☾",
        }
    }
}

impl FromStr for Theme {
    type Err = color_eyre::eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(eyre!("Unknown theme: {other}")),
        }
    }
}

/// Shared light/dark preference.
///
/// Cloning yields another view of the same store; every clone observes
/// toggles made through any other.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    tx: Arc<watch::Sender<Theme>>,
    path: Option<PathBuf>,
}

impl ThemeStore {
    pub fn new(theme: Theme) -> Self {
        let (tx, _rx) = watch::channel(theme);
        Self {
            tx: Arc::new(tx),
            path: None,
        }
    }

    /// Reads the preference saved at `path`, falling back to `fallback` when
    /// the file is missing or unreadable. Later saves go to the same path.
    pub fn load_or(path: impl Into<PathBuf>, fallback: Theme) -> Self {
        let path = path.into();
        let theme = match fs::read_to_string(&path) {
            Ok(s) => s.parse().unwrap_or_else(|e| {
                log::warn!("Ignoring saved theme in {}: {e}", path.display());
                fallback
            }),
            Err(_) => fallback,
        };
        let mut store = Self::new(theme);
        store.path = Some(path);
        store
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn theme(&self) -> Theme {
        *self.tx.borrow()
    }

    pub fn set(&self, theme: Theme) {
        self.tx.send_replace(theme);
    }

    pub fn toggle(&self) -> Theme {
        let next = self.theme().toggled();
        self.set(next);
        log::info!("Theme switched to {next}");
        next
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.tx.subscribe()
    }

    /// Persists the current theme; a no-op for in-memory stores.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.theme().to_string())?;
        Ok(())
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("folio-theme-{}-{name}", std::process::id()))
            .join("theme")
    }

    #[test]
    fn test_toggle_flips_theme() {
        let store = ThemeStore::new(Theme::Light);
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(store.toggle(), Theme::Light);
    }

    #[test]
    fn test_clones_share_state() {
        let store = ThemeStore::new(Theme::Dark);
        let other = store.clone();
        other.toggle();
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_subscribe_sees_changes() {
        let store = ThemeStore::new(Theme::Dark);
        let mut rx = store.subscribe();
        store.toggle();
        assert!(rx.has_changed().expect("sender alive"));
        assert_eq!(*rx.borrow_and_update(), Theme::Light);
    }

    #[rstest]
    #[case("light", Theme::Light)]
    #[case("dark\n", Theme::Dark)]
    #[case(" DARK ", Theme::Dark)]
    fn test_parse(#[case] input: &str, #[case] expected: Theme) {
        assert_eq!(input.parse::<Theme>().expect("valid theme"), expected);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_load_missing_file_uses_fallback() {
        let store = ThemeStore::load_or(temp_path("missing"), Theme::Light);
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_save_then_load_round_trips_preference() {
        let path = temp_path("persist");
        let store = ThemeStore::load_or(&path, Theme::Dark);
        store.toggle();
        store.save().expect("writable temp dir");

        let reloaded = ThemeStore::load_or(&path, Theme::Dark);
        assert_eq!(reloaded.theme(), Theme::Light);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_garbage_uses_fallback() {
        let path = temp_path("garbage");
        fs::create_dir_all(path.parent().expect("has parent")).expect("writable temp dir");
        fs::write(&path, "neon").expect("writable temp dir");
        let store = ThemeStore::load_or(&path, Theme::Dark);
        assert_eq!(store.theme(), Theme::Dark);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_in_memory_save_is_noop() {
        assert!(ThemeStore::default().save().is_ok());
    }
}
