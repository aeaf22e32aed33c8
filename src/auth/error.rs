use thiserror::Error;

/// Expected, user-facing login failures.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email inválido")]
    InvalidEmailFormat,
    #[error("Contraseña inválida")]
    InvalidPasswordFormat,
    #[error("Credenciales incorrectas")]
    CredentialMismatch,
}

impl AuthError {
    /// Shape failures, as opposed to a well-formed but unknown identity.
    #[must_use]
    pub const fn is_format_error(self) -> bool {
        matches!(self, Self::InvalidEmailFormat | Self::InvalidPasswordFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(AuthError::InvalidEmailFormat.to_string(), "Email inválido");
        assert_eq!(
            AuthError::InvalidPasswordFormat.to_string(),
            "Contraseña inválida"
        );
        assert_eq!(
            AuthError::CredentialMismatch.to_string(),
            "Credenciales incorrectas"
        );
    }

    #[test]
    fn mismatch_is_not_a_format_error() {
        assert!(AuthError::InvalidEmailFormat.is_format_error());
        assert!(AuthError::InvalidPasswordFormat.is_format_error());
        assert!(!AuthError::CredentialMismatch.is_format_error());
    }
}
