use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use secrecy::SecretString;

pub const CMD_LOGIN: &str = "login";
pub const ARG_URL: &str = "url";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";

#[derive(Debug, Clone)]
pub struct Options {
    pub url: String,
    pub email: String,
    pub password: SecretString,
}

impl Options {
    /// # Errors
    /// Returns an error if a required argument is missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        Ok(Self {
            url: matches
                .get_one::<String>(ARG_URL)
                .cloned()
                .context("missing required argument: --url")?,
            email: matches
                .get_one::<String>(ARG_EMAIL)
                .cloned()
                .context("missing required argument: --email")?,
            password: matches
                .get_one::<String>(ARG_PASSWORD)
                .cloned()
                .map(SecretString::from)
                .context("missing required argument: --password")?,
        })
    }
}

#[must_use]
pub fn command() -> Command {
    Command::new(CMD_LOGIN)
        .about("Log in against a running server and show the dashboard")
        .arg(
            Arg::new(ARG_URL)
                .short('u')
                .long("url")
                .help("Server base URL")
                .default_value("http://localhost:8080")
                .env("PORTERO_URL"),
        )
        .arg(
            Arg::new(ARG_EMAIL)
                .short('e')
                .long("email")
                .help("Account email")
                .env("PORTERO_EMAIL")
                .required(true),
        )
        .arg(
            Arg::new(ARG_PASSWORD)
                .long("password")
                .help("Account password")
                .env("PORTERO_PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
}
