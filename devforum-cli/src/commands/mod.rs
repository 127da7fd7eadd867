pub mod completion;
pub mod config;
pub mod profile;
pub mod session;
pub mod theme;

use std::{
    path::{Path, PathBuf},
    rc::Rc,
};

use directories::BaseDirs;
use shared::config::ClientConfig;
use web::{
    ForumApp,
    storage::FileStorage,
    theme::HeadlessSurface,
};

/// Default location of the CLI's key/value storage file.
pub fn storage_path() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.config_dir().join("devforum").join("storage.json"))
        .unwrap_or_else(|| PathBuf::from("./devforum-storage.json"))
}

/// Build the client state on top of the storage file. The terminal has no
/// colour-scheme signal, so the theme falls back to light.
pub fn open_app(config: ClientConfig, storage: &Path) -> ForumApp {
    ForumApp::new(
        config,
        Rc::new(FileStorage::new(storage)),
        Rc::new(HeadlessSurface::new(false)),
    )
}
