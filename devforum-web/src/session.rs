//! Session state machine.
//!
//! The session is either anonymous (no user) or authenticated (user present),
//! with an orthogonal `loading` flag and a transient `error` message. Actions
//! never return errors: they report their outcome as a `bool` and leave a
//! user-facing message in [`SessionState::error`].

use std::{fmt, rc::Rc};

use shared::models::{UpdateUserRequest, User};
use tracing::{info, warn};
use yewdux::{Context, Dispatch, Store};

use crate::api::{ApiError, ForumClient};

pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update user info. Please try again.";
pub const PASSWORD_CHANGE_FAILED_MESSAGE: &str = "Failed to change password. Please try again.";

#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Drives [`SessionState`] through the auth endpoints.
///
/// Actions are not serialized. Two actions in flight against the same context
/// interleave at their await points and whichever finishes last decides the
/// final state.
#[derive(Clone)]
pub struct SessionController {
    dispatch: Dispatch<SessionState>,
    client: ForumClient,
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("state", &self.dispatch.get())
            .field("client", &self.client)
            .finish()
    }
}

impl SessionController {
    pub fn new(cx: &Context, client: ForumClient) -> Self {
        Self {
            dispatch: Dispatch::new(cx),
            client,
        }
    }

    #[must_use]
    pub fn state(&self) -> Rc<SessionState> {
        self.dispatch.get()
    }

    /// Register a callback for state changes. Dropping the returned dispatch
    /// ends the subscription.
    pub fn subscribe<F>(&self, on_change: F) -> Dispatch<SessionState>
    where
        F: Fn(Rc<SessionState>) + 'static,
    {
        self.dispatch.clone().subscribe(on_change)
    }

    #[must_use]
    pub fn client(&self) -> &ForumClient {
        &self.client
    }

    /// Restore a session from a stored token.
    ///
    /// Does nothing, and issues no request, when no token is stored.
    pub async fn initialize(&self) {
        if !self.client.tokens().is_present() {
            return;
        }

        self.begin();
        match self.restore().await {
            Ok(user) => self.authenticate(user),
            Err(err) => {
                warn!(error = %err, "stored session rejected");
                self.client.tokens().remove();
                self.drop_user(SESSION_EXPIRED_MESSAGE.to_string());
            }
        }
    }

    async fn restore(&self) -> Result<User, ApiError> {
        self.client.validate_token().await?;
        self.client.current_user().await
    }

    pub async fn login(&self, username: &str, password: &str) -> bool {
        self.begin();

        let response = match self.client.login(username, password).await {
            Ok(response) => response,
            Err(err) => return self.fail_login(username, &err),
        };
        self.client.tokens().set(&response.token);

        match self.client.current_user().await {
            Ok(user) => {
                self.authenticate(user);
                true
            }
            Err(err) => {
                self.client.tokens().remove();
                self.fail_login(username, &err)
            }
        }
    }

    /// Create an account, then log in with the same credentials.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> bool {
        self.begin();

        if let Err(err) = self.client.register(username, email, password).await {
            warn!(username, error = %err, "registration failed");
            self.fail(REGISTRATION_FAILED_MESSAGE.to_string());
            return false;
        }
        info!(username, "registered account");

        self.login(username, password).await
    }

    pub fn logout(&self) {
        self.client.tokens().remove();
        self.dispatch.set(SessionState::default());
        info!("session closed");
    }

    pub async fn update_user_info(&self, changes: &UpdateUserRequest) -> bool {
        self.begin();

        match self.client.update_current_user(changes).await {
            Ok(user) => {
                self.dispatch.reduce_mut(|state| {
                    state.user = Some(user);
                    state.loading = false;
                });
                true
            }
            Err(err) => {
                warn!(error = %err, "profile update failed");
                self.fail(UPDATE_FAILED_MESSAGE.to_string());
                false
            }
        }
    }

    pub async fn change_password(&self, current_password: &str, new_password: &str) -> bool {
        self.begin();

        match self
            .client
            .change_password(current_password, new_password)
            .await
        {
            Ok(()) => {
                self.dispatch.reduce_mut(|state| {
                    state.loading = false;
                });
                true
            }
            Err(err) => {
                warn!(error = %err, "password change failed");
                self.fail(PASSWORD_CHANGE_FAILED_MESSAGE.to_string());
                false
            }
        }
    }

    pub fn clear_error(&self) {
        self.dispatch.reduce_mut(|state| {
            state.error = None;
        });
    }

    fn begin(&self) {
        self.dispatch.reduce_mut(|state| {
            state.loading = true;
            state.error = None;
        });
    }

    fn authenticate(&self, user: User) {
        info!(username = %user.username, "session established");
        self.dispatch.set(SessionState {
            user: Some(user),
            loading: false,
            error: None,
        });
    }

    fn fail(&self, message: String) {
        self.dispatch.reduce_mut(|state| {
            state.loading = false;
            state.error = Some(message);
        });
    }

    /// Leave the session anonymous with `message` as the error.
    fn drop_user(&self, message: String) {
        self.dispatch.reduce_mut(|state| {
            state.user = None;
            state.loading = false;
            state.error = Some(message);
        });
    }

    fn fail_login(&self, username: &str, err: &ApiError) -> bool {
        warn!(username, error = %err, "login failed");
        let message = err.to_string();
        let message = if message.trim().is_empty() {
            LOGIN_FAILED_MESSAGE.to_string()
        } else {
            message
        };
        self.drop_user(message);
        false
    }
}
