use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key holding the visitor's explicit choice.
pub const THEME_KEY: &str = "theme";
/// Class set on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ThemeParseError(String);

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stored choice wins, then the environment's preference, then light.
    /// An unrecognised stored value counts as no choice.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.map(Theme::from_str) {
            Some(Ok(theme)) => theme,
            _ if prefers_dark => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String key-value persistence, e.g. the browser's local storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore(HashMap<String, String>);

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug, Clone)]
pub struct ThemeSwitch<S> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeSwitch<S> {
    /// Resolves the initial theme without persisting anything.
    pub fn load(store: S, prefers_dark: bool) -> Self {
        let stored = store.get(THEME_KEY);
        let theme = Theme::resolve(stored.as_deref(), prefers_dark);
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme and persists the new choice.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.set(THEME_KEY, self.theme.as_str());
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(value: &str) -> MemoryStore {
        let mut store = MemoryStore::default();
        store.set(THEME_KEY, value);
        store
    }

    #[test]
    fn test_resolve_order() {
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Dark);
    }

    #[test]
    fn test_load_does_not_persist() {
        let switch = ThemeSwitch::load(MemoryStore::default(), true);
        assert_eq!(switch.theme(), Theme::Dark);
        assert_eq!(switch.store().get(THEME_KEY), None);
    }

    #[test]
    fn test_load_prefers_stored_choice() {
        let switch = ThemeSwitch::load(store_with("light"), true);
        assert_eq!(switch.theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut switch = ThemeSwitch::load(MemoryStore::default(), false);
        let start = switch.theme();

        assert_eq!(switch.toggle(), Theme::Dark);
        assert_eq!(switch.store().get(THEME_KEY).as_deref(), Some("dark"));

        assert_eq!(switch.toggle(), start);
        assert_eq!(switch.store().get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_survives_reload() {
        let mut switch = ThemeSwitch::load(MemoryStore::default(), false);
        switch.toggle();
        let reloaded = ThemeSwitch::load(switch.store().clone(), false);
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[test]
    fn test_round_trip_names() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(Theme::Light.to_string(), "light");
        assert!("Dark".parse::<Theme>().is_err());
    }
}
