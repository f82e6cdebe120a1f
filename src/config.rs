//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treeflip/treeflip.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `TREEFLIP_*` prefix
//!
//! CLI flags are applied on top by the command layer.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};
use crate::invert::Strategy;
use crate::render::DEFAULT_SEPARATOR;

const ENV_PREFIX: &str = "TREEFLIP";

/// Effective settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Inversion strategy used by `invert` when `--strategy` is not given
    pub strategy: Strategy,
    /// Text written after every value in in-order output
    pub separator: String,
    /// Also render the tree shape after each listing
    pub show_shape: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
            show_shape: false,
        }
    }
}

/// Get the XDG config directory for treeflip.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treeflip").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treeflip.toml"))
}

impl Settings {
    /// Load defaults, global file, `explicit` file and environment overrides.
    ///
    /// A missing global file is skipped; a missing explicit file is an error.
    #[instrument(level = "debug")]
    pub fn load(explicit: Option<&Path>) -> TreeResult<Self> {
        let global = global_config_path().filter(|p| p.exists());
        Self::load_from(global.as_deref(), explicit)
    }

    /// Same as [`Settings::load`] with the global file location supplied by the caller.
    pub fn load_from(global: Option<&Path>, explicit: Option<&Path>) -> TreeResult<Self> {
        let mut builder = Self::defaults_builder()?;

        if let Some(path) = global {
            debug!("global config: {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(TreeError::ConfigFile {
                    path: path.to_path_buf(),
                    message: "file not found".to_string(),
                });
            }
            debug!("explicit config: {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }

    fn defaults_builder() -> TreeResult<ConfigBuilder<DefaultState>> {
        let defaults = Settings::default();
        Config::builder()
            .set_default("strategy", defaults.strategy.to_string())
            .map_err(config_err)?
            .set_default("separator", defaults.separator)
            .map_err(config_err)?
            .set_default("show_shape", defaults.show_shape)
            .map_err(config_err)
    }

    /// Serialize the effective settings to TOML.
    pub fn to_toml(&self) -> TreeResult<String> {
        toml::to_string_pretty(self).map_err(|e| TreeError::Config(e.to_string()))
    }

    /// Commented template for a new config file.
    pub fn template() -> String {
        r#"# treeflip configuration
# Location: $XDG_CONFIG_HOME/treeflip/treeflip.toml

# Inversion strategy: "recursive", "iterative" or "stack"
# strategy = "iterative"

# Written after every value of an in-order listing
# separator = " "

# Render the tree shape below each listing
# show_shape = false
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> TreeError {
    TreeError::Config(e.to_string())
}
