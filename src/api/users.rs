//! Users API - staff accounts, registration and login

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::resource::{Resource, ResourceApi, RowAction};
use super::{Ack, ApiError, HttpClient};
use crate::entities::User;

pub type UsersApi = ResourceApi<User>;

impl Resource for User {
    const PATH: &'static str = "users";
    const SEARCH_PARAM: Option<&'static str> = Some("fullName");
    const ACTIONS: &'static [RowAction] = &[RowAction::Delete, RowAction::Lock];
}

/// Registration payload for a new account
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegisterForm {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fullname: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone_number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub retype_password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub role_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginForm {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone_number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

impl UsersApi {
    /// Create an account via `POST /users/register`
    pub async fn register(&self, form: &RegisterForm) -> Result<Ack, ApiError> {
        let body = self
            .client()
            .send(Method::POST, "users/register", Some(form))
            .await?;
        Ok(Ack::from_value(body))
    }
}

/// Exchange credentials for a bearer token
///
/// Rejected credentials surface as [`ApiError::Auth`] carrying the server's
/// message; transport failures pass through unchanged.
pub async fn login(client: &HttpClient, form: &LoginForm) -> Result<String, ApiError> {
    let body = match client.send(Method::POST, "users/login", Some(form)).await {
        Ok(body) => body,
        Err(ApiError::Server { status, message }) if (400..500).contains(&status) => {
            info!(status, "login rejected");
            return Err(ApiError::Auth(message));
        }
        Err(e) => return Err(e),
    };

    let response: LoginResponse =
        serde_json::from_value(body).map_err(|e| ApiError::Decode(format!("login response: {}", e)))?;
    response
        .token
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Auth("Login response did not include a token".to_string()))
}
