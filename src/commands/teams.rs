use clap::ArgMatches;

use super::{render_many, render_one, report, unknown_command};
use crate::cli_context::CliContext;
use crate::constants::{MSG_CREATED, MSG_NOTHING_TO_UPDATE, MSG_UPDATED};
use crate::diff::{build_team, diff_and_build, TeamOverrides};
use crate::error::GomematicResult;
use crate::formatting::templates;
use crate::models::{TeamUserParams, Validate};
use crate::params::{resolve_format, resolve_identifier, resolve_peer_identifier, resolve_permission};

pub async fn dispatch(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    match matches.subcommand() {
        Some(("list", sub)) => handle_team_list(ctx, sub).await,
        Some(("show", sub)) => handle_team_show(ctx, sub).await,
        Some(("delete", sub)) => handle_team_delete(ctx, sub).await,
        Some(("update", sub)) => handle_team_update(ctx, sub).await,
        Some(("create", sub)) => handle_team_create(ctx, sub).await,
        Some(("user", sub)) => match sub.subcommand() {
            Some(("list", edge)) => handle_team_user_list(ctx, edge).await,
            Some(("append", edge)) => handle_team_user_append(ctx, edge).await,
            Some(("perm", edge)) => handle_team_user_perm(ctx, edge).await,
            Some(("remove", edge)) => handle_team_user_remove(ctx, edge).await,
            other => Err(unknown_command(other.map_or("team user", |(name, _)| name))),
        },
        other => Err(unknown_command(other.map_or("team", |(name, _)| name))),
    }
}

pub async fn handle_team_list(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let teams = ctx.client().team_list().await?;
    let format = resolve_format(matches, templates::TEAM_LIST);
    render_many(ctx.renderer(), &format, &teams)
}

pub async fn handle_team_show(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let team = ctx.client().team_show(&resolve_identifier(matches)).await?;
    let format = resolve_format(matches, templates::TEAM_SHOW);
    render_one(ctx.renderer(), &format, &team)
}

pub async fn handle_team_delete(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let notice = ctx.client().team_delete(&resolve_identifier(matches)).await?;
    report(&notice.message);
    Ok(())
}

pub async fn handle_team_update(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let identifier = resolve_identifier(matches);
    let fetched = ctx.client().team_show(&identifier).await?;

    let (record, changed) = diff_and_build(&fetched, &TeamOverrides::from_matches(matches));
    if !changed {
        report(MSG_NOTHING_TO_UPDATE);
        return Ok(());
    }

    record.validate()?;

    let id = record.id.clone().unwrap_or(identifier);
    ctx.client().team_update(&id, &record).await?;
    report(MSG_UPDATED);
    Ok(())
}

pub async fn handle_team_create(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let record = build_team(&TeamOverrides::from_matches(matches))?;
    record.validate()?;

    ctx.client().team_create(&record).await?;
    report(MSG_CREATED);
    Ok(())
}

pub async fn handle_team_user_list(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let users = ctx.client().team_users(&resolve_identifier(matches)).await?;
    let format = resolve_format(matches, templates::TEAM_USER_LIST);
    render_many(ctx.renderer(), &format, &users)
}

fn edge_params(matches: &ArgMatches) -> TeamUserParams {
    TeamUserParams {
        user: resolve_peer_identifier(matches, "user"),
        perm: resolve_permission(matches),
    }
}

pub async fn handle_team_user_append(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let notice = ctx
        .client()
        .team_user_append(&resolve_identifier(matches), &edge_params(matches))
        .await?;
    report(&notice.message);
    Ok(())
}

pub async fn handle_team_user_perm(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let notice = ctx
        .client()
        .team_user_perm(&resolve_identifier(matches), &edge_params(matches))
        .await?;
    report(&notice.message);
    Ok(())
}

pub async fn handle_team_user_remove(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    let notice = ctx
        .client()
        .team_user_remove(&resolve_identifier(matches), &edge_params(matches))
        .await?;
    report(&notice.message);
    Ok(())
}
