use clap::ArgMatches;

use super::{render_one, report, unknown_command};
use crate::cli_context::CliContext;
use crate::constants::{MSG_NOTHING_TO_UPDATE, MSG_UPDATED};
use crate::diff::{diff_and_build, ProfileOverrides};
use crate::error::GomematicResult;
use crate::formatting::templates;
use crate::models::Validate;
use crate::params::{resolve_format, resolve_login};

pub async fn dispatch(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    match matches.subcommand() {
        Some(("login", sub)) => handle_login(ctx, sub).await,
        Some(("token", sub)) => handle_token(ctx, sub).await,
        Some(("show", sub)) => handle_profile_show(ctx, sub).await,
        Some(("update", sub)) => handle_profile_update(ctx, sub).await,
        other => Err(unknown_command(other.map_or("profile", |(name, _)| name))),
    }
}

pub async fn handle_login(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let login = resolve_login(matches)?;
    let token = ctx.client().login(&login).await?;
    let format = resolve_format(matches, templates::PROFILE_LOGIN);
    render_one(ctx.renderer(), &format, &token)
}

pub async fn handle_token(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let token = ctx.client().profile_token().await?;
    let format = resolve_format(matches, templates::PROFILE_TOKEN);
    render_one(ctx.renderer(), &format, &token)
}

pub async fn handle_profile_show(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let profile = ctx.client().profile_show().await?;
    let format = resolve_format(matches, templates::PROFILE_SHOW);
    render_one(ctx.renderer(), &format, &profile)
}

pub async fn handle_profile_update(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let fetched = ctx.client().profile_show().await?;

    let (record, changed) = diff_and_build(&fetched, &ProfileOverrides::from_matches(matches));
    if !changed {
        report(MSG_NOTHING_TO_UPDATE);
        return Ok(());
    }

    record.validate()?;

    ctx.client().profile_update(&record).await?;
    report(MSG_UPDATED);
    Ok(())
}
