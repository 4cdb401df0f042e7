//! The `serve` command.

use std::path::{Path, PathBuf};

use crate::cli::args::ServeArgs;
use crate::config::BuildConfig;
use crate::error::Result;
use crate::runner::{BuildOptions, BuildRunner};
use crate::toolchain::default_context;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Runs the bundler's dev server until it exits.
pub struct ServeCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: ServeArgs,
}

impl ServeCommand {
    /// Create a new serve command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: ServeArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(|p| p.to_path_buf()),
            args,
        }
    }
}

impl Command for ServeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = BuildConfig::load(&self.project_root, self.config_override.as_deref())?;
        let options = BuildOptions {
            install_missing: config.auto_install && !self.args.no_install,
            locked: config.locked_install,
            ..Default::default()
        };

        let mut runner = BuildRunner::new(&self.project_root, config);
        runner.serve(ui, &options, &default_context())?;
        Ok(CommandResult::success())
    }
}
