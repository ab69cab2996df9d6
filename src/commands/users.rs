use clap::ArgMatches;

use super::{render_many, render_one, report, unknown_command};
use crate::cli_context::CliContext;
use crate::constants::{MSG_CREATED, MSG_NOTHING_TO_UPDATE, MSG_UPDATED};
use crate::diff::{build_user, diff_and_build, UserOverrides};
use crate::error::GomematicResult;
use crate::formatting::templates;
use crate::models::{UserTeamParams, Validate};
use crate::params::{resolve_format, resolve_identifier, resolve_peer_identifier, resolve_permission};

pub async fn dispatch(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    match matches.subcommand() {
        Some(("list", sub)) => handle_user_list(ctx, sub).await,
        Some(("show", sub)) => handle_user_show(ctx, sub).await,
        Some(("delete", sub)) => handle_user_delete(ctx, sub).await,
        Some(("update", sub)) => handle_user_update(ctx, sub).await,
        Some(("create", sub)) => handle_user_create(ctx, sub).await,
        Some(("team", sub)) => match sub.subcommand() {
            Some(("list", edge)) => handle_user_team_list(ctx, edge).await,
            Some(("append", edge)) => handle_user_team_append(ctx, edge).await,
            Some(("perm", edge)) => handle_user_team_perm(ctx, edge).await,
            Some(("remove", edge)) => handle_user_team_remove(ctx, edge).await,
            other => Err(unknown_command(other.map_or("user team", |(name, _)| name))),
        },
        other => Err(unknown_command(other.map_or("user", |(name, _)| name))),
    }
}

pub async fn handle_user_list(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let users = ctx.client().user_list().await?;
    let format = resolve_format(matches, templates::USER_LIST);
    render_many(ctx.renderer(), &format, &users)
}

pub async fn handle_user_show(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let user = ctx.client().user_show(&resolve_identifier(matches)).await?;
    let format = resolve_format(matches, templates::USER_SHOW);
    render_one(ctx.renderer(), &format, &user)
}

pub async fn handle_user_delete(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let notice = ctx.client().user_delete(&resolve_identifier(matches)).await?;
    report(&notice.message);
    Ok(())
}

pub async fn handle_user_update(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let identifier = resolve_identifier(matches);
    let fetched = ctx.client().user_show(&identifier).await?;

    let (record, changed) = diff_and_build(&fetched, &UserOverrides::from_matches(matches));
    if !changed {
        report(MSG_NOTHING_TO_UPDATE);
        return Ok(());
    }

    record.validate()?;

    let id = record.id.clone().unwrap_or(identifier);
    ctx.client().user_update(&id, &record).await?;
    report(MSG_UPDATED);
    Ok(())
}

pub async fn handle_user_create(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let record = build_user(&UserOverrides::from_matches(matches))?;
    record.validate()?;

    ctx.client().user_create(&record).await?;
    report(MSG_CREATED);
    Ok(())
}

pub async fn handle_user_team_list(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let teams = ctx.client().user_teams(&resolve_identifier(matches)).await?;
    let format = resolve_format(matches, templates::USER_TEAM_LIST);
    render_many(ctx.renderer(), &format, &teams)
}

fn edge_params(matches: &ArgMatches) -> UserTeamParams {
    UserTeamParams {
        team: resolve_peer_identifier(matches, "team"),
        perm: resolve_permission(matches),
    }
}

pub async fn handle_user_team_append(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let notice = ctx
        .client()
        .user_team_append(&resolve_identifier(matches), &edge_params(matches))
        .await?;
    report(&notice.message);
    Ok(())
}

pub async fn handle_user_team_perm(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let notice = ctx
        .client()
        .user_team_perm(&resolve_identifier(matches), &edge_params(matches))
        .await?;
    report(&notice.message);
    Ok(())
}

pub async fn handle_user_team_remove(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let notice = ctx
        .client()
        .user_team_remove(&resolve_identifier(matches), &edge_params(matches))
        .await?;
    report(&notice.message);
    Ok(())
}
