//! `POST /api/auth/login`: credential check behind a JSON envelope.

use crate::auth::{AuthError, CredentialStore, Credentials, User, authenticate_with};
use axum::{body::Bytes, extract::Extension, http::StatusCode, response::Json};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login exitoso";

/// Missing or `null` fields deserialize as empty strings and then fail the format checks.
#[derive(ToSchema, Serialize, Deserialize, Default)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub password: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

impl From<LoginRequest> for Credentials {
    fn from(request: LoginRequest) -> Self {
        Self::new(request.email, request.password)
    }
}

/// Envelope returned on every path, success or not.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl LoginResponse {
    #[must_use]
    pub fn success(user: User) -> Self {
        Self {
            success: true,
            message: LOGIN_SUCCESS_MESSAGE.to_string(),
            user: Some(user),
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            user: None,
        }
    }
}

const fn status_for(err: AuthError) -> StatusCode {
    match err {
        AuthError::InvalidEmailFormat | AuthError::InvalidPasswordFormat => StatusCode::BAD_REQUEST,
        AuthError::CredentialMismatch => StatusCode::UNAUTHORIZED,
    }
}

#[utoipa::path(
    post,
    path= "/api/auth/login",
    request_body = LoginRequest,
    responses (
        (status = 200, description = "Login successful", body = LoginResponse, content_type = "application/json"),
        (status = 400, description = "Invalid email or password format", body = LoginResponse),
        (status = 401, description = "Incorrect credentials", body = LoginResponse),
        (status = 500, description = "Request body could not be parsed", body = LoginResponse),
    ),
    tag= "auth"
)]
// axum handler for login, the body is parsed as JSON whatever the content type says
#[instrument(skip_all)]
pub async fn login(
    store: Extension<Arc<dyn CredentialStore>>,
    body: Bytes,
) -> (StatusCode, Json<LoginResponse>) {
    let request = match serde_json::from_slice::<LoginRequest>(&body) {
        Ok(request) => request,
        Err(err) => {
            let message = err.to_string();

            error!("Failed to parse login request: {}", message);

            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(LoginResponse::failure(message)),
            );
        }
    };

    debug!("login request: {:?}", request);

    let credentials = Credentials::from(request);

    match authenticate_with(store.0.as_ref(), &credentials) {
        Ok(user) => {
            debug!(user_id = %user.id, "Login successful");

            (StatusCode::OK, Json(LoginResponse::success(user)))
        }

        Err(err) => {
            debug!(reason = %err, "Login rejected");

            (status_for(err), Json(LoginResponse::failure(err.to_string())))
        }
    }
}
