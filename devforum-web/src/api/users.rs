use shared::models::{ChangePasswordRequest, UpdateUserRequest, User};
use uuid::Uuid;

use super::{ApiError, ForumClient, RequestOptions, encode_body};

impl ForumClient {
    /// Fetch the account that owns the stored token.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.request("/users/me", RequestOptions::get()).await
    }

    /// Apply a partial profile update and return the updated account.
    pub async fn update_current_user(&self, changes: &UpdateUserRequest) -> Result<User, ApiError> {
        let endpoint = "/users/me";
        let body = encode_body(endpoint, changes)?;
        self.request(endpoint, RequestOptions::put().json(body)).await
    }

    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let endpoint = "/users/change-password";
        let payload = ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        let body = encode_body(endpoint, &payload)?;
        self.request_unit(endpoint, RequestOptions::post().json(body))
            .await
    }

    pub async fn user_by_id(&self, id: &Uuid) -> Result<User, ApiError> {
        self.request(&format!("/users/{id}"), RequestOptions::get())
            .await
    }
}
