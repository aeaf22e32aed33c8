//! Where the authenticator looks identities up.

use super::User;

const ADMIN_ID: &str = "1";
const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "password123";
const ADMIN_NAME: &str = "Usuario Admin";

/// Capability to resolve an email/password pair to a user.
///
/// Implementations only answer whether the pair matches; format checks run
/// before the store is consulted.
pub trait CredentialStore: Send + Sync {
    fn verify(&self, email: &str, password: &str) -> Option<User>;
}

/// The one built-in identity: `admin@example.com` / `password123`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleIdentity;

impl SingleIdentity {
    #[must_use]
    pub fn user() -> User {
        User {
            id: ADMIN_ID.to_string(),
            email: ADMIN_EMAIL.to_string(),
            name: ADMIN_NAME.to_string(),
        }
    }
}

impl CredentialStore for SingleIdentity {
    fn verify(&self, email: &str, password: &str) -> Option<User> {
        (email == ADMIN_EMAIL && password == ADMIN_PASSWORD).then(Self::user)
    }
}
