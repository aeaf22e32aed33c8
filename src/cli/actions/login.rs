use crate::client::{ClientError, Dashboard, LoginClient};
use anyhow::{Context, Result, anyhow};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};

#[derive(Debug)]
pub struct Args {
    pub url: String,
    pub email: String,
    pub password: SecretString,
}

/// Execute the login action: authenticate, then print the dashboard.
/// # Errors
/// Returns an error if the login is rejected or the server cannot be reached.
pub async fn execute(args: Args) -> Result<()> {
    let client = LoginClient::new(&args.url).context("Failed to build login client")?;

    debug!("login URL: {}", client.login_url());

    let session = match client
        .login(&args.email, args.password.expose_secret())
        .await
    {
        Ok(session) => session,
        Err(ClientError::Rejected { status, message }) => {
            return Err(anyhow!("{message} ({status})"));
        }
        Err(err) => return Err(err).context("Login failed"),
    };

    if let Some(user) = session.user() {
        info!(user_id = %user.id, "Logged in");
    }

    match Dashboard::for_context(&session) {
        Ok(dashboard) => println!("{dashboard}"),
        Err(redirect) => {
            return Err(anyhow!("not authenticated, go to {}", redirect.location));
        }
    }

    Ok(())
}
