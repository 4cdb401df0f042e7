//! Subprocess execution.
//!
//! Commands are invoked as argv (program + argument list), never through a
//! shell. Tools freshly installed into cargo's bin directory are made
//! visible by passing an explicit PATH override built from the toolchain
//! probe, not by re-sourcing shell profiles.

use crate::error::{LogmarkBuildError, Result};
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a subprocess.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the subprocess succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Options for subprocess execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with the inherited environment).
    pub env: HashMap<String, String>,

    /// Explicit PATH for the subprocess. When set, overrides the inherited
    /// PATH so binaries found only via the probe's augmented path resolve.
    pub path: Option<OsString>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

impl CommandOptions {
    /// Options that inherit both output streams (the default for builds:
    /// the user sees the tool's own output, this runner adds nothing).
    pub fn inherit() -> Self {
        Self::default()
    }

    /// Options that capture both output streams.
    pub fn captured() -> Self {
        Self {
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        }
    }

    /// Set the working directory.
    pub fn with_cwd(mut self, cwd: &Path) -> Self {
        self.cwd = Some(cwd.to_path_buf());
        self
    }

    /// Set the PATH override.
    pub fn with_path(mut self, path: OsString) -> Self {
        self.path = Some(path);
        self
    }
}

/// Render a program + args for error messages.
fn display_command(program: &Path, args: &[String]) -> String {
    let mut parts = vec![program.to_string_lossy().to_string()];
    parts.extend(args.iter().cloned());
    parts.join(" ")
}

/// Execute a subprocess and wait for it to finish.
///
/// A spawn failure is an error; a non-zero exit is an `Ok` result with
/// `success == false` — whether that is fatal is the caller's policy.
pub fn execute(program: &Path, args: &[String], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    if let Some(path) = &options.path {
        cmd.env("PATH", path);
    }

    if options.capture_stdout {
        cmd.stdout(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
    }

    if options.capture_stderr {
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stderr(Stdio::inherit());
    }

    let output = cmd.output().map_err(|e| LogmarkBuildError::CommandFailed {
        command: display_command(program, args),
        message: e.to_string(),
    })?;

    let duration = start.elapsed();

    let stdout = if options.capture_stdout {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    let stderr = if options.capture_stderr {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Execute a subprocess and collect its output silently.
pub fn execute_quiet(program: &Path, args: &[String], cwd: Option<&Path>) -> Result<CommandResult> {
    let options = CommandOptions {
        cwd: cwd.map(|p| p.to_path_buf()),
        capture_stdout: true,
        capture_stderr: true,
        ..Default::default()
    };
    execute(program, args, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[cfg(unix)]
    fn sh() -> PathBuf {
        PathBuf::from("/bin/sh")
    }

    #[cfg(unix)]
    #[test]
    fn execute_successful_command() {
        let result = execute(
            &sh(),
            &args(&["-c", "echo hello"]),
            &CommandOptions::captured(),
        )
        .unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_failing_command() {
        let result = execute(&sh(), &args(&["-c", "exit 1"]), &CommandOptions::captured()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(1));
    }

    #[cfg(unix)]
    #[test]
    fn execute_preserves_exit_code() {
        let result = execute(&sh(), &args(&["-c", "exit 7"]), &CommandOptions::captured()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(7));
    }

    #[cfg(unix)]
    #[test]
    fn execute_with_env() {
        let mut options = CommandOptions::captured();
        options
            .env
            .insert("MY_VAR".to_string(), "my_value".to_string());

        let result = execute(&sh(), &args(&["-c", "echo $MY_VAR"]), &options).unwrap();

        assert!(result.success);
        assert!(result.stdout.contains("my_value"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_with_path_override() {
        let options = CommandOptions::captured().with_path(OsString::from("/custom/bin"));

        let result = execute(&sh(), &args(&["-c", "echo $PATH"]), &options).unwrap();

        assert!(result.success);
        assert!(result.stdout.contains("/custom/bin"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let options = CommandOptions::captured().with_cwd(temp.path());

        let result = execute(&sh(), &args(&["-c", "pwd"]), &options).unwrap();

        assert!(result.success);
    }

    #[test]
    fn execute_missing_program_is_spawn_error() {
        let result = execute(
            Path::new("/nonexistent/binary/xyz"),
            &[],
            &CommandOptions::captured(),
        );

        assert!(matches!(
            result,
            Err(LogmarkBuildError::CommandFailed { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn execute_quiet_captures_silently() {
        let result = execute_quiet(&sh(), &args(&["-c", "echo hello"]), None).unwrap();
        assert!(result.success);
        assert!(result.stdout.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn command_result_tracks_duration() {
        let result = execute(
            &sh(),
            &args(&["-c", "echo fast"]),
            &CommandOptions::captured(),
        )
        .unwrap();

        assert!(result.duration.as_millis() < 5000);
    }

    #[test]
    fn display_command_joins_parts() {
        let rendered = display_command(Path::new("trunk"), &args(&["build", "--release"]));
        assert_eq!(rendered, "trunk build --release");
    }
}
