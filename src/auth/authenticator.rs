use super::{
    AuthError, Credentials, CredentialStore, SingleIdentity, User,
    validator::{is_valid_email, is_valid_password},
};
use secrecy::ExposeSecret;

/// Authenticate against the built-in identity.
///
/// # Errors
/// Returns the first failing check: email format, password format, then
/// credential mismatch.
pub fn authenticate(credentials: &Credentials) -> Result<User, AuthError> {
    authenticate_with(&SingleIdentity, credentials)
}

/// Authenticate against an arbitrary credential store.
///
/// Format checks always run first, so a store never sees malformed input.
///
/// # Errors
/// Same ordering as [`authenticate`].
pub fn authenticate_with<S>(store: &S, credentials: &Credentials) -> Result<User, AuthError>
where
    S: CredentialStore + ?Sized,
{
    if !is_valid_email(credentials.email()) {
        return Err(AuthError::InvalidEmailFormat);
    }

    let password = credentials.password().expose_secret();

    if !is_valid_password(password) {
        return Err(AuthError::InvalidPasswordFormat);
    }

    store
        .verify(credentials.email(), password)
        .ok_or(AuthError::CredentialMismatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EveryoneStore;

    impl CredentialStore for EveryoneStore {
        fn verify(&self, email: &str, _password: &str) -> Option<User> {
            Some(User {
                id: "42".to_string(),
                email: email.to_string(),
                name: "Anyone".to_string(),
            })
        }
    }

    #[test]
    fn authenticates_the_built_in_identity() {
        let user = authenticate(&Credentials::new("admin@example.com", "password123"));
        assert_eq!(
            user,
            Ok(User {
                id: "1".to_string(),
                email: "admin@example.com".to_string(),
                name: "Usuario Admin".to_string(),
            })
        );
    }

    #[test]
    fn rejects_invalid_email() {
        let result = authenticate(&Credentials::new("invalid-email", "password123"));
        assert_eq!(result, Err(AuthError::InvalidEmailFormat));
        assert_eq!(
            result.map_err(|e| e.to_string()),
            Err("Email inválido".to_string())
        );
    }

    #[test]
    fn rejects_invalid_password() {
        let result = authenticate(&Credentials::new("admin@example.com", "short"));
        assert_eq!(
            result.map_err(|e| e.to_string()),
            Err("Contraseña inválida".to_string())
        );
    }

    #[test]
    fn rejects_incorrect_credentials() {
        let result = authenticate(&Credentials::new("wrong@example.com", "password123"));
        assert_eq!(
            result.map_err(|e| e.to_string()),
            Err("Credenciales incorrectas".to_string())
        );
    }

    #[test]
    fn email_is_checked_before_password() {
        let result = authenticate(&Credentials::new("", ""));
        assert_eq!(result, Err(AuthError::InvalidEmailFormat));
    }

    #[test]
    fn shape_valid_wrong_password_is_a_mismatch() {
        let result = authenticate(&Credentials::new("admin@example.com", "password124"));
        assert_eq!(result, Err(AuthError::CredentialMismatch));
    }

    #[test]
    fn repeated_calls_yield_equal_users() {
        let credentials = Credentials::new("admin@example.com", "password123");
        assert_eq!(authenticate(&credentials), authenticate(&credentials));
    }

    #[test]
    fn custom_store_still_gets_format_checks() {
        let store = EveryoneStore;
        assert_eq!(
            authenticate_with(&store, &Credentials::new("nope", "password123")),
            Err(AuthError::InvalidEmailFormat)
        );
        assert_eq!(
            authenticate_with(&store, &Credentials::new("a@b.io", "nope")),
            Err(AuthError::InvalidPasswordFormat)
        );
        let user = authenticate_with(&store, &Credentials::new("a@b.io", "letmein99"));
        assert_eq!(user.map(|u| u.id), Ok("42".to_string()));
    }

    #[test]
    fn works_through_a_trait_object() {
        let store: &dyn CredentialStore = &SingleIdentity;
        assert!(authenticate_with(store, &Credentials::new("admin@example.com", "password123")).is_ok());
    }
}
