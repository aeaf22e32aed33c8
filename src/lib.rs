//! # Portero (minimal login service)
//!
//! `portero` exposes a single JSON login endpoint in front of a stubbed
//! credential check, plus a command-line client that performs the login call
//! and hands the caller an explicit session value.
//!
//! ## Authentication
//!
//! Credentials are shape-checked first (email and password format), then
//! compared against one built-in identity. Shape failures answer `400`, a
//! mismatch answers `401` and a body that cannot be parsed answers `500`.
//!
//! ## Sessions
//!
//! There is no server-side session. The client keeps a [`client::SessionContext`]
//! and passes it to whatever needs to know whether the user is logged in, such
//! as [`client::Dashboard::for_context`].

pub mod api;
pub mod auth;
pub mod cli;
pub mod client;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
