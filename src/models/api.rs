use serde::{Deserialize, Serialize};

use crate::error::{FieldError, GomematicError};

/// Confirmation returned by delete and membership endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    #[serde(default)]
    pub message: String,
}

/// Error body the server sends with any non-success status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorPayload {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<FieldError>>,
}

impl From<ApiErrorPayload> for GomematicError {
    fn from(payload: ApiErrorPayload) -> Self {
        GomematicError::Api {
            message: payload.message,
            errors: payload.errors.unwrap_or_default(),
        }
    }
}
