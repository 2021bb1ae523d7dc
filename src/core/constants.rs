//! Constants used throughout d1gen.
//!
//! Centralizes file names, the environment variable and the carrier key.

/// Environment variable holding the D1 database id.
pub const ENV_VAR: &str = "D1_DATABASE_ID";

/// Key of the carrier line in the template.
pub const TARGET_KEY: &str = "database_id";

/// Template file name.
pub const TEMPLATE_FILE: &str = "wrangler.example.toml";

/// Generated file name.
pub const OUTPUT_FILE: &str = "wrangler.toml";

/// Local override file name (not committed).
pub const LOCAL_FILE: &str = "wrangler.toml.local";

/// Optional project configuration file.
pub const CONFIG_FILE: &str = ".d1gen.toml";

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "D1GEN_LOG";

/// Build the placeholder token for an environment variable name.
///
/// `D1_DATABASE_ID` becomes `${D1_DATABASE_ID}`.
pub fn placeholder(env_var: &str) -> String {
    format!("${{{}}}", env_var)
}
