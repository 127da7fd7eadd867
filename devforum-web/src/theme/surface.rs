//! Where a theme becomes visible.

use std::fmt;

use super::{Theme, ThemePalette};

/// Platform hooks for the theme machine: the dark-mode preference signal and
/// the presentation side effect.
pub trait ThemeSurface: fmt::Debug {
    fn prefers_dark_scheme(&self) -> bool;

    /// Must not fail; problems are logged and skipped.
    fn apply(&self, theme: Theme, palette: &ThemePalette);
}

/// Surface for tests and non-interactive contexts: a fixed preference and no
/// side effects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadlessSurface {
    prefers_dark: bool,
}

impl HeadlessSurface {
    #[must_use]
    pub const fn new(prefers_dark: bool) -> Self {
        Self { prefers_dark }
    }
}

impl ThemeSurface for HeadlessSurface {
    fn prefers_dark_scheme(&self) -> bool {
        self.prefers_dark
    }

    fn apply(&self, _theme: Theme, _palette: &ThemePalette) {}
}

#[cfg(target_arch = "wasm32")]
pub use document::DocumentSurface;

#[cfg(target_arch = "wasm32")]
mod document {
    use tracing::{debug, warn};
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlElement, window};

    use super::{Theme, ThemePalette, ThemeSurface};

    /// The browser document: `data-theme` on `<html>` plus one
    /// `--color-<role>` custom property per palette entry.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct DocumentSurface;

    impl ThemeSurface for DocumentSurface {
        fn prefers_dark_scheme(&self) -> bool {
            window()
                .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
                .is_some_and(|media_query| media_query.matches())
        }

        fn apply(&self, theme: Theme, palette: &ThemePalette) {
            let Some(root) = window()
                .and_then(|window| window.document())
                .and_then(|document| document.document_element())
            else {
                return;
            };

            if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
                warn!(?err, "failed to set data-theme");
            }

            let Ok(root) = root.dyn_into::<HtmlElement>() else {
                return;
            };
            let style = root.style();
            for (role, value) in palette.entries() {
                if let Err(err) = style.set_property(&format!("--color-{role}"), value) {
                    warn!(role, ?err, "failed to set theme colour");
                }
            }
            debug!(theme = theme.as_str(), "applied theme to document");
        }
    }

    #[cfg(test)]
    mod tests {
        use wasm_bindgen_test::*;

        use super::*;

        #[wasm_bindgen_test]
        fn test_apply_sets_attribute_and_properties() {
            DocumentSurface.apply(Theme::Dark, &ThemePalette::DARK);

            let root = window()
                .and_then(|window| window.document())
                .and_then(|document| document.document_element())
                .unwrap();
            assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));

            let root: HtmlElement = root.dyn_into().unwrap();
            let accent = root.style().get_property_value("--color-accent").unwrap();
            assert_eq!(accent.trim(), "#5D93CC");
        }
    }
}
