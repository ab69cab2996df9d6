use std::process;

use clap::error::ErrorKind;

use gomematic_cli::config::load_env_file;
use gomematic_cli::constants::{EXIT_CONFIG, EXIT_FAILURE};
use gomematic_cli::logging::{init_logging, log_error, log_info, log_panic_info};
use gomematic_cli::{build_cli, commands, CliContext};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Must run before parsing so the env file can feed the flag defaults.
    let env_file = load_env_file();

    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_CONFIG,
            };
            process::exit(code);
        }
    };

    if matches.get_flag("debug") && init_logging().is_ok() {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            log_panic_info(info);
            default_hook(info);
        }));

        match env_file {
            Ok(Some(path)) => log_info(&format!("Loaded environment from {}", path.display())),
            Ok(None) => {}
            Err(e) => log_error(&e.to_string()),
        }
    }

    let ctx = match CliContext::from_matches(&matches) {
        Ok(ctx) => ctx,
        Err(e) => {
            log_error(&e.to_string());
            eprintln!("error: {}", e);
            process::exit(e.exit_code());
        }
    };

    if let Err(e) = commands::dispatch(&ctx, &matches).await {
        log_error(&e.to_string());
        eprintln!("error: {}", e);
        process::exit(EXIT_FAILURE);
    }
}
