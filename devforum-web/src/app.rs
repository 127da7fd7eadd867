//! Composition root for the client state.

use std::{fmt, rc::Rc};

use shared::config::ClientConfig;
use yewdux::Context;

use crate::{
    api::ForumClient,
    session::SessionController,
    storage::KeyValueStorage,
    theme::{ThemeController, ThemeSurface},
};

/// One yewdux context holding the session and theme containers, wired to a
/// shared storage backend.
///
/// Consumers receive the controllers by reference; there is no global state.
#[derive(Clone)]
pub struct ForumApp {
    cx: Context,
    config: ClientConfig,
    session: SessionController,
    theme: ThemeController,
}

impl fmt::Debug for ForumApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForumApp")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl ForumApp {
    pub fn new(
        config: ClientConfig,
        storage: Rc<dyn KeyValueStorage>,
        surface: Rc<dyn ThemeSurface>,
    ) -> Self {
        let cx = Context::new();
        let client = ForumClient::from_config(&config, storage.clone());
        let session = SessionController::new(&cx, client);
        let theme = ThemeController::new(&cx, storage, config.theme_key.clone(), surface);
        Self {
            cx,
            config,
            session,
            theme,
        }
    }

    /// App backed by `localStorage` and the live document.
    #[cfg(target_arch = "wasm32")]
    pub fn browser(config: ClientConfig) -> Self {
        use crate::{storage::BrowserStorage, theme::DocumentSurface};

        Self::new(config, Rc::new(BrowserStorage::new()), Rc::new(DocumentSurface))
    }

    /// Apply the starting theme, then try to restore a stored session.
    pub async fn start(&self) {
        self.theme.initialize();
        self.session.initialize().await;
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.cx
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &SessionController {
        &self.session
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::{
        session::SessionState,
        storage::MemoryStorage,
        theme::{HeadlessSurface, Theme},
    };

    #[tokio::test]
    async fn test_start_without_token_stays_offline() {
        let mut config = ClientConfig::with_defaults();
        // Nothing listens here; any request would fail the session check below.
        config.api_url = "http://127.0.0.1:9/api".to_string();
        let storage = Rc::new(MemoryStorage::with_entries([("theme", "dark")]));

        let app = ForumApp::new(config, storage, Rc::new(HeadlessSurface::new(false)));
        app.start().await;

        assert_eq!(app.theme().current(), Theme::Dark);
        assert_eq!(*app.session().state(), SessionState::default());
    }

    #[test]
    fn test_containers_share_storage_with_distinct_keys() {
        let storage = Rc::new(MemoryStorage::new());
        let app = ForumApp::new(
            ClientConfig::with_defaults(),
            storage.clone(),
            Rc::new(HeadlessSurface::default()),
        );

        app.session().client().tokens().set("tok");
        app.theme().set_theme(Theme::Dark);

        assert_eq!(storage.get("dev_forum_token").as_deref(), Some("tok"));
        assert_eq!(storage.get("theme").as_deref(), Some("dark"));
        assert_eq!(storage.len(), 2);
    }
}
