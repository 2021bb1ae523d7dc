//! Configuration file management.
//!
//! Handles reading and validating the optional `.d1gen.toml` file and merging
//! it with command-line overrides into [`Settings`].

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::carrier::Carrier;
use crate::core::constants;
use crate::core::validation;
use crate::error::{ConfigError, Result};

/// Contents of `.d1gen.toml`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub substitution: SubstitutionConfig,
}

/// `[paths]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub local: Option<PathBuf>,
}

/// `[substitution]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubstitutionConfig {
    /// Environment variable holding the value; also names the placeholder.
    pub env_var: Option<String>,
    /// Key of the carrier line.
    pub key: Option<String>,
}

impl Config {
    /// Parse and validate configuration text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::InvalidValue` for bad names.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration.
    ///
    /// With an explicit path the file must exist. Without one, `.d1gen.toml`
    /// in the current directory is used if present, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) if !p.exists() => return Err(ConfigError::NotFound(p.to_path_buf()).into()),
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(constants::CONFIG_FILE);
                if !default.exists() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        Self::parse(&contents)
    }

    /// Validate configured names.
    pub fn validate(&self) -> Result<()> {
        if let Some(var) = &self.substitution.env_var {
            validation::validate_env_var("substitution.env_var", var)?;
        }
        if let Some(key) = &self.substitution.key {
            validation::validate_toml_key("substitution.key", key)?;
        }
        Ok(())
    }
}

/// Path overrides from the command line (or their env vars).
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub local: Option<PathBuf>,
}

/// Effective settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub template: PathBuf,
    pub output: PathBuf,
    pub local: PathBuf,
    pub env_var: String,
    pub placeholder: String,
    pub carrier: Carrier,
}

impl Settings {
    /// Merge overrides over the config file over built-in defaults.
    pub fn resolve(config: Config, overrides: Overrides) -> Self {
        let env_var = config
            .substitution
            .env_var
            .unwrap_or_else(|| constants::ENV_VAR.to_string());
        let key = config
            .substitution
            .key
            .unwrap_or_else(|| constants::TARGET_KEY.to_string());

        let pick = |cli: Option<PathBuf>, file: Option<PathBuf>, default: &str| {
            cli.or(file).unwrap_or_else(|| PathBuf::from(default))
        };

        let settings = Self {
            template: pick(overrides.template, config.paths.template, constants::TEMPLATE_FILE),
            output: pick(overrides.output, config.paths.output, constants::OUTPUT_FILE),
            local: pick(overrides.local, config.paths.local, constants::LOCAL_FILE),
            placeholder: constants::placeholder(&env_var),
            carrier: Carrier::new(&key),
            env_var,
        };

        debug!(
            template = %settings.template.display(),
            output = %settings.output.display(),
            local = %settings.local.display(),
            env_var = %settings.env_var,
            "settings resolved"
        );

        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(Config::default(), Overrides::default())
    }
}
