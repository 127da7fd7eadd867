use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Credentials posted to `/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Issued bearer token plus a summary of the account it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: Uuid,
    pub username: String,
    pub is_admin: bool,
}

/// Account details posted to `/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterResponse {
    pub user_id: Uuid,
    pub username: String,
}

/// Claims echoed back by `/auth/validate` for a still-valid token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidateTokenResponse {
    pub user_id: Uuid,
    pub username: String,
    pub is_admin: bool,
}
