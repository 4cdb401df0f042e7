//! Environment probe for discovering cargo-installed binaries.
//!
//! The biggest source of false negatives in tool detection is cargo's bin
//! directory (`$CARGO_HOME/bin`, usually `~/.cargo/bin`) not being on PATH
//! in non-interactive shells. `cargo install` deposits binaries there, so
//! right after a successful bootstrap the tool would look missing to a
//! naive PATH lookup.
//!
//! The `ToolchainProbe` runs before tool checking to discover that
//! directory, producing an augmented PATH that subsequent checks and
//! subprocess invocations use.
//!
//! # Example
//!
//! ```no_run
//! use logmark_build::toolchain::ToolchainProbe;
//!
//! let probe = ToolchainProbe::run();
//! for path in probe.augmented_path() {
//!     println!("Additional PATH entry: {}", path.display());
//! }
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which` command — `which` behavior varies across systems and
/// is sometimes a shell builtin with inconsistent error handling.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Locate cargo's bin directory, checking `CARGO_HOME` first then the
/// default `~/.cargo/bin`. Returns None when neither exists on disk.
///
/// The env var is checked first to handle relocatable installs.
pub fn cargo_bin_dir<F>(env_fn: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    if let Ok(val) = env_fn("CARGO_HOME") {
        // An explicit CARGO_HOME wins even before its bin dir exists:
        // `cargo install` will create it.
        return Some(PathBuf::from(val).join("bin"));
    }

    let home = dirs::home_dir()?;
    let bin = home.join(".cargo/bin");
    if bin.is_dir() {
        Some(bin)
    } else {
        None
    }
}

/// Result of probing the environment for cargo-installed tool locations.
#[derive(Debug, Clone)]
pub struct ToolchainProbe {
    /// Additional PATH entries discovered from known tool locations.
    augmented_path: Vec<PathBuf>,
}

impl ToolchainProbe {
    /// Probe the environment using actual environment variables and filesystem.
    pub fn run() -> Self {
        Self::run_with_env(|key: &str| std::env::var(key))
    }

    /// Probe the environment with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn run_with_env<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let system_path = parse_system_path();
        let mut augmented_path = Vec::new();

        if let Some(bin) = cargo_bin_dir(&env_fn) {
            if !system_path.contains(&bin) && !augmented_path.contains(&bin) {
                augmented_path.push(bin);
            }
        }

        Self { augmented_path }
    }

    /// Get the additional PATH entries discovered by the probe.
    pub fn augmented_path(&self) -> &[PathBuf] {
        &self.augmented_path
    }

    /// Build a combined PATH: augmented entries prepended to system PATH.
    pub fn full_path(&self) -> Vec<PathBuf> {
        let system = parse_system_path();
        let mut result = self.augmented_path.clone();
        result.extend(system);
        result
    }

    /// Render the combined PATH as a value suitable for a subprocess env.
    pub fn path_env(&self) -> OsString {
        std::env::join_paths(self.full_path()).unwrap_or_else(|_| {
            std::env::var_os("PATH").unwrap_or_default()
        })
    }

    /// Re-probe the environment after an install may have changed things.
    pub fn refresh(&mut self) {
        let refreshed = Self::run();
        self.augmented_path = refreshed.augmented_path;
    }
}
