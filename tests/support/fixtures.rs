//! Test fixtures and constants.

/// Template file name.
pub const TEMPLATE_FILE: &str = "wrangler.example.toml";

/// Output file name.
pub const OUTPUT_FILE: &str = "wrangler.toml";

/// Local override file name.
pub const LOCAL_FILE: &str = "wrangler.toml.local";

/// Id used for environment-sourced tests.
pub const ENV_ID: &str = "12345678-1234-1234-1234-123456789012";

/// Id used for local-file-sourced tests.
pub const LOCAL_ID: &str = "abcdefab-abcd-abcd-abcd-abcdefabcdef";

/// The placeholder token.
pub const PLACEHOLDER: &str = "${D1_DATABASE_ID}";

/// A wrangler template with one placeholder.
pub const TEMPLATE: &str = r#"name = "api"
main = "src/index.ts"
compatibility_date = "2024-09-23"

[[d1_databases]]
binding = "DB"
database_name = "app-db"
database_id = "${D1_DATABASE_ID}"
migrations_dir = "migrations"
"#;

/// A template without the placeholder.
pub const TEMPLATE_NO_PLACEHOLDER: &str = r#"name = "api"

[[d1_databases]]
binding = "DB"
database_id = ""
"#;

/// Contents of a local override file holding `id`.
pub fn local_override(id: &str) -> String {
    format!(
        "[[d1_databases]]\nbinding = \"DB\"\ndatabase_name = \"app-db\"\ndatabase_id = \"{}\"\n",
        id
    )
}

/// The expected carrier line for `id`.
pub fn carrier_line(id: &str) -> String {
    format!("database_id = \"{}\"", id)
}
