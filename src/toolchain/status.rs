//! Tool status types for availability results.
//!
//! Each availability check produces a `ToolStatus` that describes whether
//! and how the external tool resolves. The check is a pure PATH query with
//! no side effects, recomputed on every run.

use std::path::PathBuf;

use super::probe::{parse_system_path, resolve_tool_path, ToolchainProbe};
use super::ToolSpec;

/// The result of checking a single tool.
#[derive(Debug, Clone)]
pub enum ToolStatus {
    /// Tool resolves on the system PATH.
    Present {
        /// Resolved binary path.
        path: PathBuf,
    },

    /// Tool binary exists in cargo's bin directory, but that directory is
    /// not on the system PATH. Builds can proceed with an augmented PATH;
    /// the user should be warned that their shell won't see the tool.
    Unlinked {
        /// Resolved binary path.
        path: PathBuf,
        /// The directory that would need to be added to PATH.
        bin_dir: PathBuf,
    },

    /// Tool is genuinely not installed anywhere we know to look.
    Missing,
}

impl ToolStatus {
    /// Whether the tool resolves on the unmodified system PATH.
    pub fn is_on_path(&self) -> bool {
        matches!(self, ToolStatus::Present { .. })
    }

    /// Whether a build can proceed (possibly with warnings).
    pub fn is_available(&self) -> bool {
        matches!(
            self,
            ToolStatus::Present { .. } | ToolStatus::Unlinked { .. }
        )
    }

    /// The resolved binary path, when there is one.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ToolStatus::Present { path } | ToolStatus::Unlinked { path, .. } => Some(path),
            ToolStatus::Missing => None,
        }
    }
}

/// Check whether a tool is available, preferring the system PATH and
/// falling back to the probe's augmented entries.
pub fn check_tool(spec: &ToolSpec, probe: &ToolchainProbe) -> ToolStatus {
    check_tool_with_path(spec, &parse_system_path(), probe)
}

/// Like [`check_tool`], but against an explicit system PATH.
///
/// This allows checking without depending on the process environment.
pub fn check_tool_with_path(
    spec: &ToolSpec,
    system_path: &[PathBuf],
    probe: &ToolchainProbe,
) -> ToolStatus {
    if let Some(path) = resolve_tool_path(spec.name, system_path) {
        return ToolStatus::Present { path };
    }

    for dir in probe.augmented_path() {
        if let Some(path) = resolve_tool_path(spec.name, std::slice::from_ref(dir)) {
            return ToolStatus::Unlinked {
                path,
                bin_dir: dir.clone(),
            };
        }
    }

    ToolStatus::Missing
}
