use clap::{Arg, ArgMatches, Command};

pub const CMD_SERVER: &str = "server";
pub const ARG_PORT: &str = "port";
pub const ARG_FRONTEND_URL: &str = "frontend-url";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub port: u16,
    pub frontend_url: Option<String>,
}

impl Options {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        Self {
            port: matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8080),
            frontend_url: matches.get_one::<String>(ARG_FRONTEND_URL).cloned(),
        }
    }
}

#[must_use]
pub fn command() -> Command {
    Command::new(CMD_SERVER)
        .about("Serve the login API")
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("PORTERO_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_FRONTEND_URL)
                .long("frontend-url")
                .help("Origin allowed by CORS, example: http://localhost:3000 (default: any origin)")
                .env("PORTERO_FRONTEND_URL"),
        )
}
