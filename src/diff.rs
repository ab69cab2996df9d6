//! Partial updates and record construction from command line overrides.
//!
//! An override is `Some` only when the caller passed the matching flag, so
//! "not given" and "given as an empty string" never collapse into each other.

use crate::error::GomematicResult;
use crate::gomematic_error;
use crate::models::{Profile, Team, User};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamOverrides {
    pub slug: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserOverrides {
    pub slug: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub active: Option<bool>,
    pub admin: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileOverrides {
    pub slug: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// A set of optional field values that can be laid over a fetched record.
pub trait Overrides {
    type Record: Clone;

    /// Writes every supplied value that differs into `record` and reports
    /// whether anything was written.
    fn apply(&self, record: &mut Self::Record) -> bool;
}

/// Returns a copy of `fetched` with the overrides applied and whether the
/// copy differs from what the server holds. A `false` result means there is
/// nothing to send.
pub fn diff_and_build<O: Overrides>(fetched: &O::Record, overrides: &O) -> (O::Record, bool) {
    let mut record = fetched.clone();
    let changed = overrides.apply(&mut record);
    (record, changed)
}

fn apply_text(target: &mut Option<String>, value: &Option<String>) -> bool {
    match value {
        Some(v) if target.as_deref() != Some(v.as_str()) => {
            *target = Some(v.clone());
            true
        }
        _ => false,
    }
}

fn apply_flag(target: &mut Option<bool>, value: Option<bool>) -> bool {
    match value {
        Some(v) if *target != Some(v) => {
            *target = Some(v);
            true
        }
        _ => false,
    }
}

// The server never hands out the stored password, so a supplied one always
// counts as a change.
fn apply_secret(target: &mut Option<String>, value: &Option<String>) -> bool {
    match value {
        Some(v) => {
            *target = Some(v.clone());
            true
        }
        None => false,
    }
}

impl Overrides for TeamOverrides {
    type Record = Team;

    fn apply(&self, record: &mut Team) -> bool {
        let mut changed = apply_text(&mut record.slug, &self.slug);
        changed |= apply_text(&mut record.name, &self.name);
        changed
    }
}

impl Overrides for UserOverrides {
    type Record = User;

    fn apply(&self, record: &mut User) -> bool {
        let mut changed = apply_text(&mut record.slug, &self.slug);
        changed |= apply_text(&mut record.email, &self.email);
        changed |= apply_text(&mut record.username, &self.username);
        changed |= apply_secret(&mut record.password, &self.password);
        changed |= apply_flag(&mut record.active, self.active);
        changed |= apply_flag(&mut record.admin, self.admin);
        changed
    }
}

impl Overrides for ProfileOverrides {
    type Record = Profile;

    fn apply(&self, record: &mut Profile) -> bool {
        let mut changed = apply_text(&mut record.slug, &self.slug);
        changed |= apply_text(&mut record.email, &self.email);
        changed |= apply_text(&mut record.username, &self.username);
        changed |= apply_secret(&mut record.password, &self.password);
        changed
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

fn required(value: &Option<String>, message: &str) -> GomematicResult<String> {
    non_empty(value).ok_or_else(|| gomematic_error!(InvalidInput, message))
}

/// Builds a new team from the create flags. Empty values count as missing.
pub fn build_team(overrides: &TeamOverrides) -> GomematicResult<Team> {
    Ok(Team {
        slug: non_empty(&overrides.slug),
        name: Some(required(&overrides.name, "you must provide a name")?),
        ..Default::default()
    })
}

pub fn build_user(overrides: &UserOverrides) -> GomematicResult<User> {
    Ok(User {
        slug: non_empty(&overrides.slug),
        email: Some(required(&overrides.email, "you must provide an email")?),
        username: Some(required(&overrides.username, "you must provide an username")?),
        password: Some(required(&overrides.password, "you must provide a password")?),
        active: overrides.active,
        admin: overrides.admin,
        ..Default::default()
    })
}
