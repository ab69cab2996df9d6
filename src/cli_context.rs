use clap::ArgMatches;

use crate::client::GomematicClient;
use crate::config::{load_config, Config, ConnectionTarget};
use crate::error::GomematicResult;
use crate::formatting::Renderer;

/// Everything a command needs for one invocation: the authenticated client
/// and the renderer with its helper filters.
pub struct CliContext {
    client: GomematicClient,
    renderer: Renderer,
}

impl CliContext {
    pub fn new(target: ConnectionTarget) -> GomematicResult<Self> {
        Ok(Self {
            client: GomematicClient::new(target)?,
            renderer: Renderer::new(),
        })
    }

    /// Resolves the connection target from the top-level flags (which
    /// already include their environment variables) and the config file.
    pub fn from_matches(matches: &ArgMatches) -> GomematicResult<Self> {
        let config = load_config()?;
        Self::new(resolve_target(matches, &config)?)
    }

    pub fn client(&self) -> &GomematicClient {
        &self.client
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }
}

pub fn resolve_target(matches: &ArgMatches, config: &Config) -> GomematicResult<ConnectionTarget> {
    ConnectionTarget::resolve(
        matches.get_one::<String>("server").map(String::as_str),
        matches.get_one::<String>("token").map(String::as_str),
        config,
    )
}
