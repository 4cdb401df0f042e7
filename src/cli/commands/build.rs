//! The `build` command.

use std::path::{Path, PathBuf};

use crate::cli::args::BuildArgs;
use crate::config::BuildConfig;
use crate::error::Result;
use crate::runner::{BuildOptions, BuildRunner};
use crate::toolchain::default_context;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Runs the bootstrap-and-build sequence.
pub struct BuildCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: BuildArgs,
}

impl BuildCommand {
    /// Create a new build command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: BuildArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(|p| p.to_path_buf()),
            args,
        }
    }

    /// Resolve CLI flags and config into build options.
    fn options(&self, config: &BuildConfig) -> BuildOptions {
        BuildOptions {
            install_missing: config.auto_install && !self.args.no_install,
            locked: self.args.locked || config.locked_install,
            release: !self.args.dev,
        }
    }
}

impl Command for BuildCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = BuildConfig::load(&self.project_root, self.config_override.as_deref())?;
        let options = self.options(&config);

        let mut runner = BuildRunner::new(&self.project_root, config);
        let outcome = runner.build(ui, &options, &default_context())?;

        tracing::debug!(
            "build finished in {:?} (installed tool: {})",
            outcome.duration,
            outcome.installed
        );
        Ok(CommandResult::success())
    }
}
