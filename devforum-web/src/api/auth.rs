use shared::models::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, ValidateTokenResponse,
};

use super::{ApiError, ForumClient, RequestOptions, encode_body};

impl ForumClient {
    /// Exchange credentials for a bearer token. The token is not stored here.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let endpoint = "/auth/login";
        let payload = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let body = encode_body(endpoint, &payload)?;
        self.request(endpoint, RequestOptions::post().json(body).anonymous())
            .await
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse, ApiError> {
        let endpoint = "/auth/register";
        let payload = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let body = encode_body(endpoint, &payload)?;
        self.request(endpoint, RequestOptions::post().json(body).anonymous())
            .await
    }

    /// Check the stored token against the backend.
    pub async fn validate_token(&self) -> Result<ValidateTokenResponse, ApiError> {
        self.request("/auth/validate", RequestOptions::get()).await
    }
}
