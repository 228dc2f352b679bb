//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `CONNSYNC_<SECTION>__<KEY>`,
//!    e.g. `CONNSYNC_LAYOUT__PROJECT_ROOT`
//! 3. Config file (`--config FILE`, else the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use connsync_core::domain::{DEFAULT_SOURCE, DEFAULT_TARGET};

/// Environment variable prefix for config overrides.
pub const ENV_PREFIX: &str = "CONNSYNC";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the template is read from and written to.
    pub layout: LayoutConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Overrides the executable-derived root.
    pub project_root: Option<PathBuf>,
    /// Source offset under the project root.
    pub source: PathBuf,
    /// Target offset under the project root.
    pub target: PathBuf,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            project_root: None,
            source: PathBuf::from(DEFAULT_SOURCE),
            target: PathBuf::from(DEFAULT_TARGET),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from file and environment on top of the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let env = config::Environment::with_prefix(ENV_PREFIX);
        match config_file {
            Some(path) => Self::load_from(path, true, env)
                .with_context(|| format!("Failed to load configuration from {}", path.display())),
            None => Self::load_from(&Self::config_path(), false, env)
                .context("Failed to load configuration"),
        }
    }

    fn load_from(path: &Path, required: bool, env: config::Environment) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(required))
            .add_source(env.prefix_separator("_").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.connsync.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("io", "camunda", "connsync")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".connsync.toml"))
    }

    /// Root from configuration, if one was set.
    pub fn project_root(&self) -> Option<&Path> {
        self.layout.project_root.as_deref()
    }
}
