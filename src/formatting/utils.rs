//! Helper filters available to every output format.

use chrono::{DateTime, Utc};
use colored::*;
use minijinja::Value;

pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

fn is_blank(value: &Value) -> bool {
    value.is_undefined() || value.is_none()
}

/// `{{ slug | color("yellow") }}`; unknown color names fall back to white.
pub fn color(value: Value, name: String) -> String {
    if is_blank(&value) {
        return String::new();
    }
    value.to_string().color(name.as_str()).to_string()
}

pub fn bold(value: Value) -> String {
    if is_blank(&value) {
        return String::new();
    }
    value.to_string().bold().to_string()
}

/// `{{ created_at | datetime }}` or `{{ created_at | datetime("%d.%m.%Y") }}`.
/// Values that are not RFC 3339 timestamps are printed unchanged.
pub fn datetime(value: Value, format: Option<String>) -> String {
    if is_blank(&value) {
        return String::new();
    }

    let raw = value.to_string();
    match DateTime::parse_from_rfc3339(&raw) {
        Ok(parsed) => parsed
            .with_timezone(&Utc)
            .format(format.as_deref().unwrap_or(DEFAULT_DATETIME_FORMAT))
            .to_string(),
        Err(_) => raw,
    }
}
