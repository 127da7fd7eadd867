//! Client-side data layer for DevForum.
//!
//! - [`api`]: typed REST calls over one request pipeline
//! - [`token`]: the bearer token in local storage
//! - [`session`] and [`theme`]: yewdux state containers with controllers
//! - [`app`]: wires them together around one [`yewdux::Context`]

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod app;
pub mod session;
pub mod storage;
pub mod theme;
pub mod token;


pub use api::{ApiError, ForumClient, RequestOptions};
pub use app::ForumApp;
pub use session::{SessionController, SessionState};
pub use storage::KeyValueStorage;
pub use theme::{Theme, ThemeController, ThemePalette, ThemeState};
pub use token::TokenStore;
