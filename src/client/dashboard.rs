use super::SessionContext;
use std::fmt;

const LOGIN_LOCATION: &str = "/login";

/// Where an anonymous caller is sent instead of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub location: &'static str,
}

/// Protected landing view for a logged-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    name: String,
    email: String,
}

impl Dashboard {
    /// Render the dashboard for an authenticated context, or redirect to login.
    ///
    /// # Errors
    /// Returns a [`Redirect`] to `/login` when the context is anonymous.
    pub fn for_context(context: &SessionContext) -> Result<Self, Redirect> {
        context
            .user()
            .map(|user| Self {
                name: user.name.clone(),
                email: user.email.clone(),
            })
            .ok_or(Redirect {
                location: LOGIN_LOCATION,
            })
    }

    #[must_use]
    pub fn greeting(&self) -> String {
        format!("Hola, {}", self.name)
    }
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dashboard")?;
        writeln!(f, "{}", self.greeting())?;
        writeln!(f, "¡Bienvenido al Dashboard!")?;
        write!(f, "Usuario: {}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{auth::SingleIdentity, client::Session};

    #[test]
    fn anonymous_is_redirected_to_login() {
        assert_eq!(
            Dashboard::for_context(&SessionContext::Anonymous),
            Err(Redirect { location: "/login" })
        );
    }

    #[test]
    fn authenticated_sees_greeting_and_email() -> Result<(), Redirect> {
        let context = SessionContext::Authenticated(Session::new(SingleIdentity::user()));
        let dashboard = Dashboard::for_context(&context)?;
        assert_eq!(dashboard.greeting(), "Hola, Usuario Admin");

        let rendered = dashboard.to_string();
        assert!(rendered.starts_with("Dashboard"));
        assert!(rendered.contains("¡Bienvenido al Dashboard!"));
        assert!(rendered.ends_with("Usuario: admin@example.com"));
        Ok(())
    }

    #[test]
    fn logging_out_loses_access() {
        let context = SessionContext::Authenticated(Session::new(SingleIdentity::user()));
        let context = context.logout();
        assert!(Dashboard::for_context(&context).is_err());
    }
}
