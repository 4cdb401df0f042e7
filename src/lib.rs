//! logmark-build - Bootstrap-and-build runner for the LogMark WebAssembly front-end.
//!
//! logmark-build replaces the ad-hoc `build.sh` with a small CLI that
//! verifies the `trunk` bundler is available, installs it via cargo when it
//! is not, and invokes a release build — failing fast with the subprocess's
//! own exit status when anything goes wrong.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional YAML configuration with script-equivalent defaults
//! - [`error`] - Error types and result aliases
//! - [`runner`] - The check → install → build sequence
//! - [`shell`] - Subprocess execution
//! - [`toolchain`] - Tool probing, status, and installation
//! - [`ui`] - Terminal output, spinners, and the mockable UI trait
//!
//! # Example
//!
//! ```no_run
//! use logmark_build::config::BuildConfig;
//! use logmark_build::runner::{BuildOptions, BuildRunner};
//! use logmark_build::toolchain::default_context;
//! use logmark_build::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Normal);
//! let mut runner = BuildRunner::new(std::path::Path::new("."), BuildConfig::default());
//! runner.build(ui.as_mut(), &BuildOptions::default(), &default_context())?;
//! # Ok::<(), logmark_build::LogmarkBuildError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod shell;
pub mod toolchain;
pub mod ui;

pub use error::{LogmarkBuildError, Result};
