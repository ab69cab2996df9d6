use std::io::Write;

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use super::utils;
use crate::constants::MSG_EMPTY_RESULT;
use crate::error::GomematicResult;

/// Renders records through user supplied formats. The helper filters are
/// registered once when the renderer is built and never change afterwards.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Chainable);

        env.add_filter("color", utils::color);
        env.add_filter("bold", utils::bold);
        env.add_filter("datetime", utils::datetime);

        Self { env }
    }

    /// Renders a single record. Every format gets a trailing newline.
    pub fn render<T, W>(&self, format: &str, record: &T, out: &mut W) -> GomematicResult<()>
    where
        T: Serialize,
        W: Write,
    {
        let source = with_newline(format);
        let tmpl = self.env.template_from_str(&source)?;
        tmpl.render_to_write(record, &mut *out)?;
        out.flush()?;
        Ok(())
    }

    /// Renders one block per record. An empty list only produces the
    /// `empty result` notice on `status` and leaves the format untouched.
    pub fn render_list<T, W, S>(
        &self,
        format: &str,
        records: &[T],
        out: &mut W,
        status: &mut S,
    ) -> GomematicResult<()>
    where
        T: Serialize,
        W: Write,
        S: Write,
    {
        if records.is_empty() {
            writeln!(status, "{}", MSG_EMPTY_RESULT)?;
            return Ok(());
        }

        let source = with_newline(format);
        let tmpl = self.env.template_from_str(&source)?;
        for record in records {
            tmpl.render_to_write(record, &mut *out)?;
        }
        out.flush()?;
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn with_newline(format: &str) -> String {
    format!("{}\n", format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::templates;
    use crate::models::{Team, TeamUser, User};

    fn render_to_string<T: Serialize>(format: &str, record: &T) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        Renderer::new().render(format, record, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_default_team_show() {
        let team = Team {
            id: Some("7".to_string()),
            slug: Some("ops".to_string()),
            name: Some("Ops".to_string()),
            created_at: Some("2024-01-02T03:04:05Z".parse().unwrap()),
            updated_at: None,
        };

        let output = render_to_string(templates::TEAM_SHOW, &team);
        assert_eq!(
            output,
            "Slug: ops\nID: 7\nName: Ops\nCreated: 2024-01-02 03:04:05 UTC\nUpdated: \n\n"
        );
    }

    #[test]
    fn test_render_custom_format() {
        let user = User {
            username: Some("jdoe".to_string()),
            admin: Some(true),
            ..Default::default()
        };

        let output = render_to_string("{{ username | upper }} admin={{ admin }}", &user);
        assert_eq!(output, "JDOE admin=true\n");
    }

    #[test]
    fn test_missing_nested_record_renders_empty() {
        let row = TeamUser {
            perm: Some("owner".to_string()),
            ..Default::default()
        };

        let output = render_to_string("{{ user.username }}|{{ perm }}", &row);
        assert_eq!(output, "|owner\n");
    }

    #[test]
    fn test_render_list_writes_each_record() {
        let teams = vec![
            Team {
                name: Some("Ops".to_string()),
                ..Default::default()
            },
            Team {
                name: Some("Dev".to_string()),
                ..Default::default()
            },
        ];

        let mut out = Vec::new();
        let mut status = Vec::new();
        Renderer::new()
            .render_list("{{ name }}", &teams, &mut out, &mut status)
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Ops\nDev\n");
        assert!(status.is_empty());
    }

    #[test]
    fn test_empty_list_skips_template() {
        let teams: Vec<Team> = Vec::new();
        let mut out = Vec::new();
        let mut status = Vec::new();

        // The format is broken on purpose; it must never be compiled.
        Renderer::new()
            .render_list("{{ name ", &teams, &mut out, &mut status)
            .unwrap();

        assert!(out.is_empty());
        assert_eq!(String::from_utf8(status).unwrap(), "empty result\n");
    }

    #[test]
    fn test_broken_format_is_an_error() {
        let mut out = Vec::new();
        let result = Renderer::new().render("{{ name ", &Team::default(), &mut out);
        assert!(result.unwrap_err().normalize().starts_with("failed to render template:"));
    }
}
