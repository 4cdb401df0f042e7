//! The `status` command.
//!
//! Reports where the toolchain stands without changing anything: whether
//! trunk and cargo resolve, the trunk version, and whether the output
//! directory currently exists.

use std::path::{Path, PathBuf};

use serde_json::json;

use crate::cli::args::{StatusArgs, StatusFormat};
use crate::config::BuildConfig;
use crate::error::Result;
use crate::shell::execute_quiet;
use crate::toolchain::probe::resolve_tool_path;
use crate::toolchain::{check_tool, parse_version, ToolStatus, ToolchainProbe, TRUNK};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Shows toolchain and output-directory status.
pub struct StatusCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: StatusArgs,
}

/// Collected status facts, independent of the output format.
#[derive(Debug)]
struct StatusReport {
    tool_status: ToolStatus,
    tool_version: Option<String>,
    installer_path: Option<PathBuf>,
    dist_dir: String,
    dist_exists: bool,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: StatusArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(|p| p.to_path_buf()),
            args,
        }
    }

    fn collect(&self, config: &BuildConfig) -> StatusReport {
        let probe = ToolchainProbe::run();
        let tool_status = check_tool(&TRUNK, &probe);

        let tool_version = tool_status.path().and_then(|path| {
            let args: Vec<String> = TRUNK.version_args.iter().map(|s| s.to_string()).collect();
            execute_quiet(path, &args, None)
                .ok()
                .filter(|r| r.success)
                .and_then(|r| parse_version(&r.stdout))
        });

        let installer_path = resolve_tool_path(TRUNK.installer, &probe.full_path());

        let dist_path = self.project_root.join(&config.dist_dir);
        StatusReport {
            tool_status,
            tool_version,
            installer_path,
            dist_dir: config.dist_dir.clone(),
            dist_exists: dist_path.is_dir(),
        }
    }

    fn render_human(&self, report: &StatusReport, ui: &mut dyn UserInterface) {
        match &report.tool_status {
            ToolStatus::Present { path } => {
                let version = report
                    .tool_version
                    .as_deref()
                    .unwrap_or("unknown version");
                ui.success(&format!("trunk {} ({})", version, path.display()));
            }
            ToolStatus::Unlinked { path, bin_dir } => {
                ui.warning(&format!(
                    "trunk at {} (not on PATH; add {} to PATH)",
                    path.display(),
                    bin_dir.display()
                ));
            }
            ToolStatus::Missing => {
                ui.error("trunk not installed");
                ui.hint(TRUNK.install_hint);
            }
        }

        match &report.installer_path {
            Some(path) => ui.success(&format!("cargo ({})", path.display())),
            None => ui.error("cargo not found on PATH"),
        }

        if report.dist_exists {
            ui.message(&format!("output: ./{}/ (present)", report.dist_dir));
        } else {
            ui.message(&format!("output: ./{}/ (not built yet)", report.dist_dir));
        }
    }

    fn render_json(&self, report: &StatusReport) {
        let value = json!({
            "trunk": {
                "available": report.tool_status.is_available(),
                "on_path": report.tool_status.is_on_path(),
                "path": report.tool_status.path().map(|p| p.display().to_string()),
                "version": report.tool_version,
            },
            "cargo": {
                "available": report.installer_path.is_some(),
                "path": report.installer_path.as_ref().map(|p| p.display().to_string()),
            },
            "output": {
                "dir": report.dist_dir,
                "exists": report.dist_exists,
            },
        });
        println!("{}", value);
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = BuildConfig::load(&self.project_root, self.config_override.as_deref())?;
        let report = self.collect(&config);

        match self.args.format {
            StatusFormat::Human => self.render_human(&report, ui),
            StatusFormat::Json => self.render_json(&report),
        }

        Ok(CommandResult::success())
    }
}
