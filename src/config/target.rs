use reqwest::Url;

use super::Config;
use crate::constants::{API_BASE_PATH, DEFAULT_SERVER};
use crate::error::{GomematicError, GomematicResult};

/// Where requests go and which credential they carry. Built once per
/// invocation, before any request is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    host: Url,
    token: Option<String>,
}

impl ConnectionTarget {
    /// Combines the flag/environment values with the config file. The
    /// flag value wins when present, even if it is empty.
    pub fn resolve(
        server: Option<&str>,
        token: Option<&str>,
        config: &Config,
    ) -> GomematicResult<Self> {
        let server = server
            .map(str::to_string)
            .or_else(|| config.server.clone())
            .unwrap_or_else(|| DEFAULT_SERVER.to_string());

        let token = token.map(str::to_string).or_else(|| config.token.clone());

        Self::parse(&server, token.as_deref())
    }

    pub fn parse(server: &str, token: Option<&str>) -> GomematicResult<Self> {
        if server.trim().is_empty() {
            return Err(GomematicError::Config(
                "you must provide the server address.".to_string(),
            ));
        }

        let invalid = || GomematicError::Config("invalid server address, bad format?.".to_string());

        let host = Url::parse(server.trim()).map_err(|_| invalid())?;
        if !matches!(host.scheme(), "http" | "https") {
            return Err(invalid());
        }
        if host.host_str().map_or(true, str::is_empty) || host.cannot_be_a_base() {
            return Err(invalid());
        }

        Ok(Self {
            host,
            token: token.filter(|t| !t.is_empty()).map(str::to_string),
        })
    }

    pub fn host(&self) -> &Url {
        &self.host
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Absolute URL for an API resource. Segments are percent-encoded, so
    /// identifiers can be passed through verbatim.
    pub fn endpoint(&self, segments: &[&str]) -> GomematicResult<Url> {
        let mut url = self.host.clone();
        url.set_query(None);
        url.set_fragment(None);

        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| GomematicError::Config("invalid server address, bad format?.".to_string()))?;
            path.pop_if_empty();
            path.extend(API_BASE_PATH.split('/').filter(|s| !s.is_empty()));
            path.extend(segments);
        }

        Ok(url)
    }
}
