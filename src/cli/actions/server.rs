use crate::{
    api,
    auth::{CredentialStore, SingleIdentity},
};
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub frontend_url: Option<String>,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the CORS origin is invalid or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    debug!("Server args: {:?}", args);

    let store: Arc<dyn CredentialStore> = Arc::new(SingleIdentity);

    api::new(args.port, args.frontend_url.as_deref(), store).await
}
