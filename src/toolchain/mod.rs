//! External tool detection and bootstrapping.
//!
//! This module provides tools for detecting whether the external build
//! tool is installed and accessible, and for installing it when missing.
//!
//! # Modules
//!
//! - [`probe`] - Environment probe for discovering cargo-installed binaries
//! - [`status`] - Tool status types for availability results
//! - [`installer`] - Tool installation via `cargo install`

pub mod installer;
pub mod probe;
pub mod status;

pub use installer::{default_context, install_tool, InstallerContext};
pub use probe::ToolchainProbe;
pub use status::{check_tool, check_tool_with_path, ToolStatus};

/// Static description of an external tool this runner can bootstrap.
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    /// Executable name as it appears on PATH.
    pub name: &'static str,
    /// Program used to install the tool.
    pub installer: &'static str,
    /// Arguments passed to the installer.
    pub install_args: &'static [&'static str],
    /// Arguments that print the tool's version.
    pub version_args: &'static [&'static str],
    /// Shown when the tool cannot be bootstrapped.
    pub install_hint: &'static str,
}

/// The WASM bundler that produces the `dist/` output.
pub const TRUNK: ToolSpec = ToolSpec {
    name: "trunk",
    installer: "cargo",
    install_args: &["install", "trunk"],
    version_args: &["--version"],
    install_hint: "Install manually with: cargo install trunk",
};

/// Extract a semver-looking version from a tool's `--version` output.
///
/// `trunk --version` prints e.g. `trunk 0.21.7`; other tools add build
/// metadata after the triple, which is ignored.
pub fn parse_version(output: &str) -> Option<String> {
    let re = regex::Regex::new(r"\d+\.\d+\.\d+").ok()?;
    re.find(output).map(|m| m.as_str().to_string())
}
