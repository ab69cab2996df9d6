// Module declarations
pub mod cli;
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod diff;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod params;


// Re-export commonly used items
pub use cli::build_cli;
pub use cli_context::CliContext;
pub use client::GomematicClient;
pub use config::{load_config, Config, ConnectionTarget};
pub use diff::{diff_and_build, ProfileOverrides, TeamOverrides, UserOverrides};
pub use error::{GomematicError, GomematicResult, TransportKind};
pub use formatting::Renderer;
pub use models::*;
