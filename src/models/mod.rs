pub mod api;
pub mod auth;
pub mod membership;
pub mod profile;
pub mod team;
pub mod user;
pub mod validate;

// Re-export commonly used types
pub use api::{ApiErrorPayload, Notice};
pub use auth::{AuthLogin, AuthToken};
pub use membership::{PermissionLevel, TeamUser, TeamUserParams, UserTeam, UserTeamParams};
pub use profile::Profile;
pub use team::Team;
pub use user::User;
pub use validate::Validate;
