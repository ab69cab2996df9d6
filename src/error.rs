use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{EXIT_CONFIG, EXIT_FAILURE};

const VALIDATION_HEADER: &str = "failed to validate record:";
const VALIDATION_FALLBACK: &str = "failed to validate record";

/// A single field-level complaint, either reported by the server or by local
/// record validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Coarse class of a failed connection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Timeout,
    UnknownHost,
    Refused,
    Other,
}

impl TransportKind {
    pub fn message(self) -> &'static str {
        match self {
            TransportKind::Timeout => "connection to server timed out",
            TransportKind::UnknownHost => "unknown host for server connection",
            TransportKind::Refused => "connection to server had been refused",
            TransportKind::Other => "failed to connect to the server",
        }
    }

    /// Walks the source chain of a transport error and picks the first
    /// recognizable cause. Unmatched errors land on `Other`.
    pub fn classify(err: &(dyn std::error::Error + 'static), timed_out: bool) -> Self {
        if timed_out {
            return TransportKind::Timeout;
        }

        let mut current: Option<&(dyn std::error::Error + 'static)> = Some(err);
        while let Some(cause) = current {
            if let Some(io_err) = cause.downcast_ref::<io::Error>() {
                match io_err.kind() {
                    io::ErrorKind::TimedOut => return TransportKind::Timeout,
                    io::ErrorKind::ConnectionRefused
                    | io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted => return TransportKind::Refused,
                    _ => {}
                }
            }

            let text = cause.to_string();
            // hyper 0.14 wraps resolver failures as "dns error: ..." and the
            // getaddrinfo text reads "failed to lookup address information".
            if text.starts_with("dns error") || text.contains("failed to lookup address") {
                return TransportKind::UnknownHost;
            }

            current = cause.source();
        }

        TransportKind::Other
    }
}

#[derive(Error, Debug)]
pub enum GomematicError {
    #[error("{0}")]
    Config(String),

    #[error("{}", .0.message())]
    Transport(TransportKind),

    #[error("{}", itemize(.message.as_deref(), .errors))]
    Api {
        message: Option<String>,
        errors: Vec<FieldError>,
    },

    #[error("{}", itemize(None, .0))]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    InvalidInput(String),

    #[error("failed to render template: {0}")]
    Template(#[from] minijinja::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse server response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type GomematicResult<T> = Result<T, GomematicError>;

impl GomematicError {
    /// The single human-readable line (or block) shown after `error: `.
    pub fn normalize(&self) -> String {
        self.to_string()
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            GomematicError::Config(_) => EXIT_CONFIG,
            _ => EXIT_FAILURE,
        }
    }
}

impl From<reqwest::Error> for GomematicError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return GomematicError::Other("failed to parse server response".to_string());
        }
        if err.is_builder() {
            return GomematicError::Other("failed to build request".to_string());
        }
        GomematicError::Transport(TransportKind::classify(&err, err.is_timeout()))
    }
}

fn itemize(message: Option<&str>, errors: &[FieldError]) -> String {
    if !errors.is_empty() {
        let mut lines = vec![VALIDATION_HEADER.to_string(), String::new()];
        lines.extend(errors.iter().map(|e| e.to_string()));
        return lines.join("\n");
    }

    match message {
        Some(msg) if !msg.is_empty() => msg.to_string(),
        _ => VALIDATION_FALLBACK.to_string(),
    }
}

/// Prefixes a foreign error with what was being attempted. Always yields
/// `Other`; configuration failures go through `gomematic_error!(Config, ..)`.
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> GomematicResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> GomematicResult<T> {
        self.map_err(|e| GomematicError::Other(format!("{}: {}", msg, e)))
    }
}

#[macro_export]
macro_rules! gomematic_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::GomematicError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::GomematicError::$error_type(format!($fmt, $($arg)*))
    };
}
