//! Light/dark theme state with persistence and presentation side effects.

mod palette;
mod surface;

use std::{fmt, rc::Rc, str::FromStr};

use serde::{Deserialize, Serialize};
use shared::config::client::DEFAULT_THEME_KEY;
use thiserror::Error;
use tracing::debug;
use yewdux::{Context, Dispatch, Store};

use crate::storage::KeyValueStorage;

pub use palette::ThemePalette;
#[cfg(target_arch = "wasm32")]
pub use surface::DocumentSurface;
pub use surface::{HeadlessSurface, ThemeSurface};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn palette(self) -> &'static ThemePalette {
        match self {
            Self::Light => &ThemePalette::LIGHT,
            Self::Dark => &ThemePalette::DARK,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`, expected `light` or `dark`")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Current theme and its colours. The colours always belong to the theme.
#[derive(Debug, Clone, PartialEq, Eq, Store)]
pub struct ThemeState {
    current_theme: Theme,
    colors: ThemePalette,
}

impl ThemeState {
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        Self {
            current_theme: theme,
            colors: *theme.palette(),
        }
    }

    #[must_use]
    pub const fn current_theme(&self) -> Theme {
        self.current_theme
    }

    #[must_use]
    pub const fn colors(&self) -> &ThemePalette {
        &self.colors
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::for_theme(Theme::default())
    }
}

/// Owns the theme container along with the storage and surface it writes to.
#[derive(Clone)]
pub struct ThemeController {
    dispatch: Dispatch<ThemeState>,
    storage: Rc<dyn KeyValueStorage>,
    key: String,
    surface: Rc<dyn ThemeSurface>,
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("state", &self.dispatch.get())
            .field("key", &self.key)
            .field("surface", &self.surface)
            .finish_non_exhaustive()
    }
}

impl ThemeController {
    pub fn new(
        cx: &Context,
        storage: Rc<dyn KeyValueStorage>,
        key: impl Into<String>,
        surface: Rc<dyn ThemeSurface>,
    ) -> Self {
        Self {
            dispatch: Dispatch::new(cx),
            storage,
            key: key.into(),
            surface,
        }
    }

    /// Controller persisting under the default `theme` key.
    pub fn with_default_key(
        cx: &Context,
        storage: Rc<dyn KeyValueStorage>,
        surface: Rc<dyn ThemeSurface>,
    ) -> Self {
        Self::new(cx, storage, DEFAULT_THEME_KEY, surface)
    }

    /// Pick the starting theme and apply it.
    ///
    /// A valid stored value wins, then the platform dark-mode preference, then
    /// light. The choice is not written back to storage.
    pub fn initialize(&self) -> Theme {
        let stored = self
            .storage
            .get(&self.key)
            .and_then(|value| value.parse::<Theme>().ok());
        let theme = stored.unwrap_or_else(|| {
            if self.surface.prefers_dark_scheme() {
                Theme::Dark
            } else {
                Theme::Light
            }
        });

        debug!(%theme, from_storage = stored.is_some(), "initializing theme");
        self.surface.apply(theme, theme.palette());
        self.dispatch.set(ThemeState::for_theme(theme));
        theme
    }

    pub fn toggle(&self) -> Theme {
        let theme = self.current().toggled();
        self.commit(theme);
        theme
    }

    /// Switch to `theme`. Does nothing when it is already current.
    pub fn set_theme(&self, theme: Theme) {
        if self.current() == theme {
            return;
        }
        self.commit(theme);
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.dispatch.get().current_theme()
    }

    #[must_use]
    pub fn state(&self) -> Rc<ThemeState> {
        self.dispatch.get()
    }

    pub fn subscribe<F>(&self, on_change: F) -> Dispatch<ThemeState>
    where
        F: Fn(Rc<ThemeState>) + 'static,
    {
        self.dispatch.clone().subscribe(on_change)
    }

    fn commit(&self, theme: Theme) {
        debug!(%theme, "switching theme");
        self.storage.set(&self.key, theme.as_str());
        self.surface.apply(theme, theme.palette());
        self.dispatch.set(ThemeState::for_theme(theme));
    }
}
