//! Credential shape checks and the single-identity authenticator.
//!
//! Nothing in this module logs, persists or keeps state between calls; the
//! HTTP boundary in [`crate::api`] is responsible for mapping outcomes to
//! responses.

pub mod authenticator;
pub mod error;
pub mod store;
pub mod validator;

pub use self::authenticator::{authenticate, authenticate_with};
pub use self::error::AuthError;
pub use self::store::{CredentialStore, SingleIdentity};
pub use self::validator::{is_valid_email, is_valid_password};

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An authenticated account as returned to callers.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Email/password pair submitted for a single login attempt.
///
/// The password stays wrapped so it never shows up in `Debug` output or
/// tracing fields.
#[derive(Clone, Debug)]
pub struct Credentials {
    email: String,
    password: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        let password: String = password.into();

        Self {
            email: email.into(),
            password: SecretString::from(password),
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub const fn password(&self) -> &SecretString {
        &self.password
    }
}
