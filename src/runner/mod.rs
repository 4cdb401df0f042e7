//! Build orchestration.
//!
//! The run is strictly sequential: check the tool, install it if missing,
//! invoke the build, report. There is exactly one branch (the existence
//! check), no loops, no retries, no concurrency. Any failure aborts the
//! whole run; nothing this runner does needs rolling back.

use crate::config::BuildConfig;
use crate::error::{LogmarkBuildError, Result};
use crate::shell::{execute, CommandOptions};
use crate::toolchain::{
    check_tool_with_path, install_tool, probe::parse_system_path, InstallerContext, ToolSpec,
    ToolStatus, ToolchainProbe, TRUNK,
};
use crate::ui::UserInterface;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Options for a build run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Install the tool when it is missing (off with `--no-install`).
    pub install_missing: bool,

    /// Pass `--locked` to the installer.
    pub locked: bool,

    /// Build with the release profile.
    pub release: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            install_missing: true,
            locked: false,
            release: true,
        }
    }
}

/// Result of a completed build run.
#[derive(Debug)]
pub struct BuildOutcome {
    /// Whether the tool had to be installed first.
    pub installed: bool,

    /// Duration of the build subprocess.
    pub duration: Duration,
}

/// Orchestrates the check → install → build sequence.
pub struct BuildRunner {
    project_root: PathBuf,
    config: BuildConfig,
    probe: ToolchainProbe,
    system_path: Vec<PathBuf>,
    tool: ToolSpec,
}

impl BuildRunner {
    /// Create a runner for a project, probing the real environment.
    pub fn new(project_root: &Path, config: BuildConfig) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            probe: ToolchainProbe::run(),
            system_path: parse_system_path(),
            tool: TRUNK,
        }
    }

    /// Create a runner with an explicit probe and search path (for testing).
    pub fn with_probe(
        project_root: &Path,
        config: BuildConfig,
        probe: ToolchainProbe,
        system_path: Vec<PathBuf>,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            probe,
            system_path,
            tool: TRUNK,
        }
    }

    /// Ensure the build tool is available, installing it when missing.
    ///
    /// Returns the resolved status and whether an install was performed.
    /// The availability check itself is a pure PATH query; the install is
    /// attempted at most once, and its failure is fatal.
    pub fn ensure_tool(
        &mut self,
        ui: &mut dyn UserInterface,
        options: &BuildOptions,
        ctx: &InstallerContext<'_>,
    ) -> Result<(ToolStatus, bool)> {
        let status = check_tool_with_path(&self.tool, &self.system_path, &self.probe);
        match status {
            ToolStatus::Present { .. } => {
                tracing::debug!("'{}' resolved on PATH", self.tool.name);
                Ok((status, false))
            }
            ToolStatus::Unlinked {
                ref path,
                ref bin_dir,
            } => {
                ui.warning(&format!(
                    "{} found at {} but {} is not on PATH; using it for this run",
                    self.tool.name,
                    path.display(),
                    bin_dir.display()
                ));
                Ok((status, false))
            }
            ToolStatus::Missing => {
                if !options.install_missing {
                    return Err(LogmarkBuildError::ToolUnavailable {
                        tool: self.tool.name.to_string(),
                        hint: self.tool.install_hint.to_string(),
                    });
                }
                ui.message(&format!("{} not found. Installing...", self.tool.name));
                let status = install_tool(&self.tool, &mut self.probe, options.locked, ctx)?;
                self.system_path = parse_system_path();
                Ok((status, true))
            }
        }
    }

    /// Run the build: ensure the tool, invoke it, report.
    ///
    /// The tool's own output is what the user sees; on success the output
    /// directory message and serve hint are printed. A non-zero exit is
    /// fatal and carries the subprocess's code.
    pub fn build(
        &mut self,
        ui: &mut dyn UserInterface,
        options: &BuildOptions,
        ctx: &InstallerContext<'_>,
    ) -> Result<BuildOutcome> {
        let (status, installed) = self.ensure_tool(ui, options, ctx)?;
        let tool_path = self.resolved_path(&status)?;

        ui.message(&format!(
            "Building {} for WebAssembly...",
            self.config.app_name
        ));

        let args = self.build_args(options);
        tracing::debug!("{} {}", tool_path.display(), args.join(" "));
        if ui.output_mode() == crate::ui::OutputMode::Verbose {
            ui.message(&format!("> {} {}", self.tool.name, args.join(" ")));
        }

        let capture = !ui.output_mode().shows_subprocess_output();
        let mut spinner = if capture {
            Some(ui.start_spinner(&format!("{} {}", self.tool.name, args.join(" "))))
        } else {
            None
        };

        let mut cmd_options = CommandOptions {
            capture_stdout: capture,
            capture_stderr: capture,
            ..Default::default()
        };
        cmd_options = cmd_options
            .with_cwd(&self.project_root)
            .with_path(self.probe.path_env());

        let result = execute(&tool_path, &args, &cmd_options)?;

        if let Some(s) = spinner.as_mut() {
            s.finish_clear();
        }

        if !result.success {
            if capture && !result.stderr.is_empty() {
                ui.error(stderr_tail(&result.stderr, 20).as_str());
            }
            return Err(LogmarkBuildError::BuildFailed {
                tool: self.tool.name.to_string(),
                code: result.exit_code,
            });
        }

        ui.success(&format!(
            "Build complete! Files are in ./{}/",
            self.config.dist_dir
        ));
        ui.hint(&format!("To serve locally: {} serve", self.tool.name));

        Ok(BuildOutcome {
            installed,
            duration: result.duration,
        })
    }

    /// Run the tool's dev server, inheriting the terminal until it exits.
    pub fn serve(
        &mut self,
        ui: &mut dyn UserInterface,
        options: &BuildOptions,
        ctx: &InstallerContext<'_>,
    ) -> Result<()> {
        let (status, _) = self.ensure_tool(ui, options, ctx)?;
        let tool_path = self.resolved_path(&status)?;

        let args = vec!["serve".to_string()];
        let cmd_options = CommandOptions::inherit()
            .with_cwd(&self.project_root)
            .with_path(self.probe.path_env());

        let result = execute(&tool_path, &args, &cmd_options)?;
        if result.success {
            Ok(())
        } else {
            Err(LogmarkBuildError::ServeFailed {
                tool: self.tool.name.to_string(),
                code: result.exit_code,
            })
        }
    }

    /// The argument list for the build invocation.
    fn build_args(&self, options: &BuildOptions) -> Vec<String> {
        let mut args = vec!["build".to_string()];
        if options.release {
            args.push("--release".to_string());
        }
        if self.config.has_custom_dist() {
            args.push("--dist".to_string());
            args.push(self.config.dist_dir.clone());
        }
        args.extend(self.config.trunk_args.iter().cloned());
        args
    }

    fn resolved_path(&self, status: &ToolStatus) -> Result<PathBuf> {
        status
            .path()
            .cloned()
            .ok_or_else(|| LogmarkBuildError::ToolUnavailable {
                tool: self.tool.name.to_string(),
                hint: self.tool.install_hint.to_string(),
            })
    }
}

/// The last `max_lines` lines of captured stderr, rejoined.
fn stderr_tail(stderr: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = stderr.lines().collect();
    let start = lines.len().saturating_sub(max_lines);
    lines[start..].join("\n")
}
