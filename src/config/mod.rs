//! Build configuration loading.
//!
//! Configuration is optional: with no `logmark-build.yml` present, the
//! defaults reproduce the historical `build.sh` behavior exactly. Every
//! field is defaulted so partial files are fine.

use crate::error::{LogmarkBuildError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default name of the config file at the project root.
pub const CONFIG_FILE: &str = "logmark-build.yml";

/// Build configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BuildConfig {
    /// Application name shown in the build banner.
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Output directory the bundler writes to (relative to project root).
    /// Forwarded to trunk via `--dist` when not the default.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,

    /// Install the build tool automatically when it is missing.
    #[serde(default = "default_true")]
    pub auto_install: bool,

    /// Pass `--locked` to `cargo install`.
    #[serde(default)]
    pub locked_install: bool,

    /// Extra arguments appended to every `trunk build` invocation.
    #[serde(default)]
    pub trunk_args: Vec<String>,
}

fn default_app_name() -> String {
    "LogMark".to_string()
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            dist_dir: default_dist_dir(),
            auto_install: true,
            locked_install: false,
            trunk_args: Vec::new(),
        }
    }
}

impl BuildConfig {
    /// Load configuration for a project.
    ///
    /// An explicit `override_path` must exist. Otherwise the project-root
    /// config file is used when present, defaults when absent.
    pub fn load(project_root: &Path, override_path: Option<&Path>) -> Result<Self> {
        let path = match override_path {
            Some(p) => {
                if !p.exists() {
                    return Err(LogmarkBuildError::ConfigNotFound {
                        path: p.to_path_buf(),
                    });
                }
                p.to_path_buf()
            }
            None => {
                let default = project_root.join(CONFIG_FILE);
                if !default.exists() {
                    tracing::debug!("no {} found, using defaults", CONFIG_FILE);
                    return Ok(Self::default());
                }
                default
            }
        };

        Self::load_from_path(&path)
    }

    /// Load and parse a specific config file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|e| LogmarkBuildError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Whether the output directory differs from trunk's default.
    pub fn has_custom_dist(&self) -> bool {
        self.dist_dir != default_dist_dir()
    }
}
