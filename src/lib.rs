//! d1gen - generate a deployment config from a template with a validated
//! D1 database id.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # Resolve → render → write → verify
//! │   ├── check         # Verify an existing output file
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Pipeline stages
//!     ├── config        # .d1gen.toml and effective settings
//!     ├── resolve       # Env var / local override lookup
//!     ├── validation    # UUID shape check, name checks
//!     ├── carrier       # database_id line patterns
//!     ├── template      # Placeholder substitution
//!     ├── normalize     # Carrier line rewrite
//!     ├── render        # In-memory stages chained
//!     └── output        # Write and re-verify
//! ```

pub mod cli;
pub mod core;
pub mod error;
