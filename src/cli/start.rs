use crate::cli::{
    actions::Action,
    commands::{self, ARG_VERBOSITY, server::CMD_SERVER},
    dispatch, telemetry,
};
use anyhow::Result;
use clap::{ArgMatches, parser::ValueSource};
use tracing::Level;

const fn level_for(verbosity: u8) -> Option<Level> {
    match verbosity {
        0 => None,
        1 => Some(Level::WARN),
        2 => Some(Level::INFO),
        3 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

/// Without `-v` or `PORTERO_LOG_LEVEL` the server logs its requests at INFO,
/// while `login` stays at errors so only the dashboard reaches the terminal.
fn verbosity_level(matches: &ArgMatches) -> Option<Level> {
    if matches.value_source(ARG_VERBOSITY) == Some(ValueSource::DefaultValue) {
        return match matches.subcommand_name() {
            Some(CMD_SERVER) => Some(Level::INFO),
            _ => None,
        };
    }

    level_for(matches.get_one::<u8>(ARG_VERBOSITY).copied().unwrap_or(0))
}

/// Parse the command line, set up telemetry and return the action to run.
///
/// # Errors
///
/// Returns an error if telemetry initialization or action dispatch fails
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    telemetry::init(verbosity_level(&matches))?;

    dispatch::handler(&matches)
}
