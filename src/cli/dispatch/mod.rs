use crate::cli::{
    actions::{server::Args, Action},
    commands::{ARG_BIND, ARG_PORT},
};
use anyhow::{Context, Result};
use std::net::IpAddr;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8080);
    let bind = matches
        .get_one::<IpAddr>(ARG_BIND)
        .copied()
        .context("missing required argument: --bind")?;

    Ok(Action::Server(Args { port, bind }))
}
