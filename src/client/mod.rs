//! HTTP client for the login endpoint.
//!
//! A successful login hands back a [`SessionContext`] that the caller owns and
//! passes along explicitly; nothing is stored globally.

mod dashboard;
mod session;

pub use self::dashboard::{Dashboard, Redirect};
pub use self::session::{Session, SessionContext};

use crate::api::{
    LOGIN_PATH,
    handlers::login::{LoginRequest, LoginResponse},
};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

/// Minimum password length accepted before a request is even sent.
const MIN_PASSWORD_LEN: usize = 3;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("{0}")]
    Precheck(&'static str),
    #[error("login rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("login request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct LoginClient {
    client: Client,
    login_url: Url,
}

impl LoginClient {
    /// Build a client for the server at `base_url`. A path on the base URL is
    /// kept, so a server mounted under a prefix is reached at `{prefix}/api/auth/login`.
    ///
    /// # Errors
    /// Returns an error if the URL cannot be parsed or the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let login_url = login_url(base_url)?;
        let client = Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .build()?;

        Ok(Self { client, login_url })
    }

    #[must_use]
    pub fn login_url(&self) -> &Url {
        &self.login_url
    }

    /// Post the credentials and open a session on success.
    ///
    /// # Errors
    /// Returns [`ClientError::Precheck`] without sending anything when the input
    /// is obviously unusable, [`ClientError::Rejected`] with the server message
    /// when the login is refused, and [`ClientError::Transport`] when the call
    /// itself fails.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionContext, ClientError> {
        precheck(email, password)?;

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .post(self.login_url.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let envelope: LoginResponse = response.json().await?;

        debug!(status = %status, success = envelope.success, "login response");

        match envelope {
            LoginResponse {
                success: true,
                user: Some(user),
                ..
            } => Ok(SessionContext::Authenticated(Session::new(user))),
            LoginResponse { message, .. } => Err(ClientError::Rejected {
                status: status.as_u16(),
                message,
            }),
        }
    }
}

fn precheck(email: &str, password: &str) -> Result<(), ClientError> {
    if email.is_empty() || !email.contains('@') {
        return Err(ClientError::Precheck("email must contain '@'"));
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ClientError::Precheck("password is too short"));
    }

    Ok(())
}

fn login_url(base_url: &str) -> Result<Url, url::ParseError> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(LOGIN_PATH.trim_start_matches('/'))
}
