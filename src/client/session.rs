use crate::auth::User;
use ulid::Ulid;

/// A logged-in user plus the opaque marker handed out at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
    marker: String,
}

impl Session {
    #[must_use]
    pub fn new(user: User) -> Self {
        Self {
            user,
            marker: Ulid::new().to_string(),
        }
    }

    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Opaque value only meaningful to the client; the server never checks it.
    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }
}

/// Authentication status, passed explicitly to whoever needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionContext {
    #[default]
    Anonymous,
    Authenticated(Session),
}

impl SessionContext {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(session) => Some(session.user()),
        }
    }

    /// Drop the session; the result is always anonymous.
    #[must_use]
    pub fn logout(self) -> Self {
        Self::Anonymous
    }
}
