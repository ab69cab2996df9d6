use regex::Regex;

use super::{Profile, Team, User};
use crate::error::{FieldError, GomematicError, GomematicResult};

lazy_static::lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap();
}

/// Structural checks a record has to pass before it is sent to the server.
pub trait Validate {
    fn field_errors(&self) -> Vec<FieldError>;

    fn validate(&self) -> GomematicResult<()> {
        let errors = self.field_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(GomematicError::Validation(errors))
        }
    }
}

fn require(errors: &mut Vec<FieldError>, field: &str, value: Option<&str>) -> bool {
    match value {
        Some(v) if !v.trim().is_empty() => true,
        _ => {
            errors.push(FieldError::new(field, "is required"));
            false
        }
    }
}

fn check_email(errors: &mut Vec<FieldError>, value: Option<&str>) {
    if require(errors, "email", value) {
        if let Some(email) = value {
            if !EMAIL.is_match(email) {
                errors.push(FieldError::new("email", "is not a valid email address"));
            }
        }
    }
}

fn check_slug(errors: &mut Vec<FieldError>, value: Option<&str>) {
    if let Some(slug) = value {
        if slug.chars().any(char::is_whitespace) {
            errors.push(FieldError::new("slug", "must not contain whitespace"));
        }
    }
}

impl Validate for Team {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_slug(&mut errors, self.slug.as_deref());
        require(&mut errors, "name", self.name.as_deref());
        errors
    }
}

impl Validate for User {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_slug(&mut errors, self.slug.as_deref());
        require(&mut errors, "username", self.username.as_deref());
        check_email(&mut errors, self.email.as_deref());
        errors
    }
}

impl Validate for Profile {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_slug(&mut errors, self.slug.as_deref());
        require(&mut errors, "username", self.username.as_deref());
        check_email(&mut errors, self.email.as_deref());
        errors
    }
}
