//! Tool installation via the package fetcher.
//!
//! Handles remediation when the build tool is missing: runs the install
//! command with the subprocess's own output visible, then re-probes and
//! re-checks. Install failures are fatal and never retried.

use crate::error::{LogmarkBuildError, Result};
use crate::shell::{execute, CommandOptions, CommandResult};
use std::path::{Path, PathBuf};

use super::probe::{resolve_tool_path, ToolchainProbe};
use super::status::{check_tool, ToolStatus};
use super::ToolSpec;

/// Mockable dependencies for the installer.
pub struct InstallerContext<'a> {
    /// Run the install subprocess.
    pub run_command:
        &'a dyn Fn(&Path, &[String], &CommandOptions) -> Result<CommandResult>,
}

/// Build the default `InstallerContext` for production use.
pub fn default_context() -> InstallerContext<'static> {
    InstallerContext {
        run_command: &execute,
    }
}

/// Install a missing tool and verify it is now resolvable.
///
/// Preconditions and failure modes, in order:
/// 1. The installer binary must itself resolve on the probe's full PATH;
///    otherwise the fetch mechanism is unavailable and the run aborts
///    with `ToolUnavailable`.
/// 2. A non-zero exit from the install subprocess is `InstallFailed`
///    carrying the child's exit code.
/// 3. After a zero exit the probe is refreshed and the tool re-checked;
///    still unresolvable means `ToolUnavailable` with a PATH hint.
///
/// Returns the refreshed tool status on success.
pub fn install_tool(
    spec: &ToolSpec,
    probe: &mut ToolchainProbe,
    locked: bool,
    ctx: &InstallerContext<'_>,
) -> Result<ToolStatus> {
    let installer_path = resolve_installer(spec, probe)?;

    let mut args: Vec<String> = spec.install_args.iter().map(|s| s.to_string()).collect();
    if locked {
        args.push("--locked".to_string());
    }

    tracing::debug!(
        "installing '{}' via {} {}",
        spec.name,
        installer_path.display(),
        args.join(" ")
    );

    // The fetcher's own output is what the user sees; stdio is inherited.
    let options = CommandOptions::inherit().with_path(probe.path_env());
    let result = (ctx.run_command)(&installer_path, &args, &options)?;

    if !result.success {
        return Err(LogmarkBuildError::InstallFailed {
            tool: spec.name.to_string(),
            code: result.exit_code,
        });
    }

    probe.refresh();
    let status = check_tool(spec, probe);
    if status.is_available() {
        Ok(status)
    } else {
        Err(LogmarkBuildError::ToolUnavailable {
            tool: spec.name.to_string(),
            hint: format!(
                "install exited 0 but '{}' is still not resolvable; \
                 check that cargo's bin directory is on PATH",
                spec.name
            ),
        })
    }
}

/// Resolve the installer binary on the probe's full PATH.
fn resolve_installer(spec: &ToolSpec, probe: &ToolchainProbe) -> Result<PathBuf> {
    resolve_tool_path(spec.installer, &probe.full_path()).ok_or_else(|| {
        LogmarkBuildError::ToolUnavailable {
            tool: spec.name.to_string(),
            hint: format!(
                "'{}' is required to install it but was not found on PATH. \
                 Install Rust via https://rustup.rs and retry.",
                spec.installer
            ),
        }
    })
}
