//! Typed values pulled out of the parsed command line.

use clap::ArgMatches;

use crate::constants::DEFAULT_PERM;
use crate::diff::{ProfileOverrides, TeamOverrides, UserOverrides};
use crate::error::GomematicResult;
use crate::gomematic_error;
use crate::logging::log_debug;
use crate::models::{AuthLogin, PermissionLevel};

fn string_arg(matches: &ArgMatches, name: &str) -> Option<String> {
    matches.try_get_one::<String>(name).ok().flatten().cloned()
}

fn bool_arg(matches: &ArgMatches, name: &str) -> Option<bool> {
    matches.try_get_one::<bool>(name).ok().flatten().copied()
}

/// The `--id` value verbatim. A missing id becomes an empty string and is
/// left for the server to reject.
pub fn resolve_identifier(matches: &ArgMatches) -> String {
    string_arg(matches, "id").unwrap_or_default()
}

/// The `--perm` value verbatim, `user` when unset. Unknown levels are passed
/// through.
pub fn resolve_permission(matches: &ArgMatches) -> String {
    let perm = string_arg(matches, "perm").unwrap_or_else(|| DEFAULT_PERM.to_string());
    if PermissionLevel::parse(&perm).is_none() {
        log_debug(&format!("Passing unknown permission '{}' to the server", perm));
    }
    perm
}

/// The other side of a membership edge: `--user` below `team user`,
/// `--team` below `user team`.
pub fn resolve_peer_identifier(matches: &ArgMatches, name: &str) -> String {
    string_arg(matches, name).unwrap_or_default()
}

/// The hidden `--format` value, or the handler's default template.
pub fn resolve_format(matches: &ArgMatches, default: &str) -> String {
    string_arg(matches, "format").unwrap_or_else(|| default.to_string())
}

pub fn resolve_login(matches: &ArgMatches) -> GomematicResult<AuthLogin> {
    let username = string_arg(matches, "username")
        .ok_or_else(|| gomematic_error!(InvalidInput, "please provide a username"))?;
    let password = string_arg(matches, "password")
        .ok_or_else(|| gomematic_error!(InvalidInput, "please provide a password"))?;

    Ok(AuthLogin { username, password })
}

impl TeamOverrides {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            slug: string_arg(matches, "slug"),
            name: string_arg(matches, "name"),
        }
    }
}

impl UserOverrides {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            slug: string_arg(matches, "slug"),
            email: string_arg(matches, "email"),
            username: string_arg(matches, "username"),
            password: string_arg(matches, "password"),
            active: bool_arg(matches, "active"),
            admin: bool_arg(matches, "admin"),
        }
    }
}

impl ProfileOverrides {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            slug: string_arg(matches, "slug"),
            email: string_arg(matches, "email"),
            username: string_arg(matches, "username"),
            password: string_arg(matches, "password"),
        }
    }
}
