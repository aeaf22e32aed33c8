//! Map parsed CLI arguments to the action the binary runs.

use crate::cli::{
    actions::{Action, login, server},
    commands,
};
use anyhow::{Context, Result, anyhow};

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if no known subcommand was given or its arguments are incomplete.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand_name() {
        Some(commands::server::CMD_SERVER) => {
            let options =
                commands::server::Options::parse(sub_m(matches, commands::server::CMD_SERVER)?);

            Ok(Action::Server(server::Args {
                port: options.port,
                frontend_url: options.frontend_url,
            }))
        }

        Some(commands::login::CMD_LOGIN) => {
            let options =
                commands::login::Options::parse(sub_m(matches, commands::login::CMD_LOGIN)?)?;

            Ok(Action::Login(login::Args {
                url: options.url,
                email: options.email,
                password: options.password,
            }))
        }

        Some(other) => Err(anyhow!("unknown subcommand: {other}")),
        None => Err(anyhow!("missing subcommand")),
    }
}

fn sub_m<'a>(matches: &'a clap::ArgMatches, subcommand: &str) -> Result<&'a clap::ArgMatches> {
    matches
        .subcommand_matches(subcommand)
        .context("arguments not found")
}
