#[allow(clippy::module_inception)]
mod config;
mod target;

pub use config::{config_path, load_config, load_config_from, load_env_file, Config};
pub use target::ConnectionTarget;
