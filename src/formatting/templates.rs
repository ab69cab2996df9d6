//! Default output formats, one per entity and view. Any of them can be
//! replaced per invocation through the hidden `--format` flag.

pub const PROFILE_LOGIN: &str = r#"Token: {{ token | color("yellow") }}
Expires: {{ expires_at | datetime }}
"#;

pub const PROFILE_TOKEN: &str = r#"Token: {{ token | color("yellow") }}
"#;

pub const PROFILE_SHOW: &str = r#"Slug: {{ slug | color("yellow") }}
ID: {{ id }}
Username: {{ username }}
Email: {{ email }}
Active: {{ active }}
Admin: {{ admin }}
Created: {{ created_at | datetime }}
Updated: {{ updated_at | datetime }}
"#;

pub const TEAM_LIST: &str = r#"Slug: {{ slug | color("yellow") }}
ID: {{ id }}
Name: {{ name }}
"#;

pub const TEAM_SHOW: &str = r#"Slug: {{ slug | color("yellow") }}
ID: {{ id }}
Name: {{ name }}
Created: {{ created_at | datetime }}
Updated: {{ updated_at | datetime }}
"#;

pub const TEAM_USER_LIST: &str = r#"Slug: {{ user.slug | color("yellow") }}
ID: {{ user.id }}
Username: {{ user.username }}
Permission: {{ perm }}
"#;

pub const USER_LIST: &str = r#"Slug: {{ slug | color("yellow") }}
ID: {{ id }}
Username: {{ username }}
"#;

pub const USER_SHOW: &str = r#"Slug: {{ slug | color("yellow") }}
ID: {{ id }}
Username: {{ username }}
Email: {{ email }}
Active: {{ active }}
Admin: {{ admin }}
Created: {{ created_at | datetime }}
Updated: {{ updated_at | datetime }}
"#;

pub const USER_TEAM_LIST: &str = r#"Slug: {{ team.slug | color("yellow") }}
ID: {{ team.id }}
Name: {{ team.name }}
Permission: {{ perm }}
"#;
