pub const DEFAULT_SERVER: &str = "http://localhost:8080";
pub const API_BASE_PATH: &str = "/api/v1";
pub const API_KEY_HEADER: &str = "X-API-Key";
pub const CONFIG_FILE: &str = ".gomematic-cli.json";

// Environment overrides
pub const ENV_SERVER: &str = "GOMEMATIC_SERVER";
pub const ENV_TOKEN: &str = "GOMEMATIC_TOKEN";
pub const ENV_FILE: &str = "GOMEMATIC_ENV_FILE";
pub const ENV_CONFIG: &str = "GOMEMATIC_CONFIG";
pub const ENV_DEBUG: &str = "GOMEMATIC_DEBUG";

pub const DEFAULT_PERM: &str = "user";

// Fixed status lines written to stderr
pub const MSG_EMPTY_RESULT: &str = "empty result";
pub const MSG_NOTHING_TO_UPDATE: &str = "nothing to update...";
pub const MSG_CREATED: &str = "successfully created";
pub const MSG_UPDATED: &str = "successfully updated";

// Process exit codes
pub const EXIT_CONFIG: i32 = 1;
pub const EXIT_FAILURE: i32 = 2;
