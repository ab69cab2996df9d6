pub mod profile;
pub mod teams;
pub mod users;

use std::io;

use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::{GomematicError, GomematicResult};
use crate::gomematic_error;
use crate::formatting::Renderer;
use crate::logging::log_info;

/// Routes a parsed command line to its handler. Handlers return their error
/// instead of exiting; `main` owns the exit code.
pub async fn dispatch(ctx: &CliContext, matches: &ArgMatches) -> GomematicResult<()> {
    match matches.subcommand() {
        Some(("profile", sub)) => profile::dispatch(ctx, sub).await,
        Some(("team", sub)) => teams::dispatch(ctx, sub).await,
        Some(("user", sub)) => users::dispatch(ctx, sub).await,
        Some((name, _)) => Err(unknown_command(name)),
        None => Err(unknown_command("")),
    }
}

pub(crate) fn unknown_command(name: &str) -> GomematicError {
    gomematic_error!(
        InvalidInput,
        "unknown command '{}', use 'gomematic-cli --help' for available commands",
        name
    )
}

/// Status and confirmation lines go to stderr so stdout only carries
/// rendered records.
pub(crate) fn report(message: &str) {
    log_info(message);
    eprintln!("{}", message);
}

pub(crate) fn render_one<T: serde::Serialize>(
    renderer: &Renderer,
    format: &str,
    record: &T,
) -> GomematicResult<()> {
    renderer.render(format, record, &mut io::stdout().lock())
}

pub(crate) fn render_many<T: serde::Serialize>(
    renderer: &Renderer,
    format: &str,
    records: &[T],
) -> GomematicResult<()> {
    renderer.render_list(format, records, &mut io::stdout().lock(), &mut io::stderr().lock())
}
