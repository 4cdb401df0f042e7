//! End-to-end tests for the bootstrap-and-build flow.
//!
//! Each test runs the compiled binary inside a sandbox with a controlled
//! PATH, HOME, and CARGO_HOME, using stub `trunk`/`cargo` executables that
//! record their invocations to marker files.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]
#![cfg(unix)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Sandbox with a project dir, a PATH dir for stub tools, and a cargo home.
struct Sandbox {
    temp: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        for dir in ["project", "path-bin", "cargo-home"] {
            fs::create_dir_all(temp.path().join(dir)).unwrap();
        }
        Self { temp }
    }

    fn project(&self) -> PathBuf {
        self.temp.path().join("project")
    }

    fn path_bin(&self) -> PathBuf {
        self.temp.path().join("path-bin")
    }

    fn cargo_home(&self) -> PathBuf {
        self.temp.path().join("cargo-home")
    }

    fn marker(&self, name: &str) -> PathBuf {
        self.temp.path().join(name)
    }

    fn marker_lines(&self, name: &str) -> Vec<String> {
        fs::read_to_string(self.marker(name))
            .unwrap_or_default()
            .lines()
            .map(|l| l.to_string())
            .collect()
    }

    fn write_tool(&self, dir: &Path, name: &str, script: &str) {
        fs::create_dir_all(dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, script).unwrap();
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// A stub trunk that records its args and exits with the given code.
    fn install_fake_trunk(&self, dir: &Path, exit_code: i32) {
        let script = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"--version\" ]; then echo \"trunk 0.21.7\"; exit 0; fi\n\
             echo \"$@\" >> {}\n\
             exit {}\n",
            self.marker("trunk-invocations").display(),
            exit_code
        );
        self.write_tool(dir, "trunk", &script);
    }

    /// A stub cargo that records its args and "installs" a working trunk
    /// into the sandbox cargo home.
    fn install_fake_cargo(&self, exit_code: i32) {
        let cargo_bin_dir = self.cargo_home().join("bin");
        let script = format!(
            "#!/bin/sh\n\
             echo \"$@\" >> {cargo_marker}\n\
             if [ {code} -ne 0 ]; then exit {code}; fi\n\
             mkdir -p {bin}\n\
             printf '#!/bin/sh\\necho \"$@\" >> {trunk_marker}\\nexit 0\\n' > {bin}/trunk\n\
             chmod +x {bin}/trunk\n\
             exit 0\n",
            cargo_marker = self.marker("cargo-invocations").display(),
            code = exit_code,
            bin = cargo_bin_dir.display(),
            trunk_marker = self.marker("trunk-invocations").display(),
        );
        self.write_tool(&self.path_bin(), "cargo", &script);
    }

    /// A command with the sandbox environment applied.
    fn cmd(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("logmark-build"));
        cmd.current_dir(self.project());
        cmd.env_clear();
        // `path-bin` holds the stub tools and stays first so tool discovery
        // resolves to the stubs. The standard coreutils directories are
        // appended so the stub shell scripts can find `mkdir`/`chmod`/etc.;
        // no real `trunk`/`cargo` lives there, so tool isolation is intact.
        let mut path = std::ffi::OsString::from(self.path_bin());
        path.push(":/usr/bin:/bin");
        cmd.env("PATH", path);
        cmd.env("HOME", self.temp.path());
        cmd.env("CARGO_HOME", self.cargo_home());
        cmd
    }
}

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).to_string()
}

// --- Scenario 1: tool present ---

#[test]
fn tool_present_builds_and_reports() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_trunk(&sandbox.path_bin(), 0);

    let assert = sandbox.cmd().assert().success();
    let stdout = stdout_of(&assert);

    assert!(stdout.contains("Building LogMark for WebAssembly..."));
    assert!(stdout.contains("Build complete! Files are in ./dist/"));
    assert!(stdout.contains("To serve locally: trunk serve"));
    assert!(!stdout.contains("trunk not found"));

    // The banner precedes the completion message.
    let building = stdout.find("Building LogMark").unwrap();
    let complete = stdout.find("Build complete!").unwrap();
    assert!(building < complete);

    assert_eq!(sandbox.marker_lines("trunk-invocations"), ["build --release"]);
}

#[test]
fn running_twice_installs_nothing() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_trunk(&sandbox.path_bin(), 0);

    sandbox.cmd().assert().success();
    sandbox.cmd().assert().success();

    // Two builds, zero install attempts.
    assert_eq!(
        sandbox.marker_lines("trunk-invocations"),
        ["build --release", "build --release"]
    );
    assert!(!sandbox.marker("cargo-invocations").exists());
}

// --- Scenario 2: tool absent, install succeeds ---

#[test]
fn tool_absent_installs_then_builds() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_cargo(0);

    let assert = sandbox.cmd().assert().success();
    let stdout = stdout_of(&assert);

    assert!(stdout.contains("trunk not found. Installing..."));
    assert!(stdout.contains("Building LogMark for WebAssembly..."));
    assert!(stdout.contains("Build complete! Files are in ./dist/"));

    // Install happens before the build banner.
    let installing = stdout.find("trunk not found. Installing...").unwrap();
    let building = stdout.find("Building LogMark").unwrap();
    assert!(installing < building);

    assert_eq!(sandbox.marker_lines("cargo-invocations"), ["install trunk"]);
    assert_eq!(sandbox.marker_lines("trunk-invocations"), ["build --release"]);
}

// --- Scenario 3: tool absent, install fails ---

#[test]
fn failed_install_aborts_before_build() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_cargo(7);

    let assert = sandbox
        .cmd()
        .env("CI", "1")
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("failed"));
    let stdout = stdout_of(&assert);

    assert!(stdout.contains("trunk not found. Installing..."));
    assert!(!stdout.contains("Building"));
    assert!(!sandbox.marker("trunk-invocations").exists());
    // Exactly one install attempt, no retries.
    assert_eq!(sandbox.marker_lines("cargo-invocations"), ["install trunk"]);
}

// --- Failure propagation ---

#[test]
fn build_failure_propagates_exit_code() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_trunk(&sandbox.path_bin(), 3);

    let assert = sandbox.cmd().assert().failure().code(3);
    let stdout = stdout_of(&assert);

    assert!(stdout.contains("Building LogMark for WebAssembly..."));
    assert!(!stdout.contains("Build complete!"));
}

// --- --no-install ---

#[test]
fn no_install_fails_without_attempting() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_cargo(0);

    sandbox
        .cmd()
        .env("CI", "1")
        .args(["build", "--no-install"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cargo install trunk"));

    assert!(!sandbox.marker("cargo-invocations").exists());
    assert!(!sandbox.marker("trunk-invocations").exists());
}

// --- Locked installs ---

#[test]
fn locked_flag_reaches_the_installer() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_cargo(0);

    sandbox
        .cmd()
        .args(["build", "--locked"])
        .assert()
        .success();

    assert_eq!(
        sandbox.marker_lines("cargo-invocations"),
        ["install trunk --locked"]
    );
}

// --- Profiles and configuration ---

#[test]
fn dev_flag_drops_release() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_trunk(&sandbox.path_bin(), 0);

    sandbox.cmd().args(["build", "--dev"]).assert().success();

    assert_eq!(sandbox.marker_lines("trunk-invocations"), ["build"]);
}

#[test]
fn config_app_name_changes_banner() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_trunk(&sandbox.path_bin(), 0);
    fs::write(
        sandbox.project().join("logmark-build.yml"),
        "app_name: Demo\n",
    )
    .unwrap();

    sandbox
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Building Demo for WebAssembly..."));
}

#[test]
fn custom_dist_dir_is_forwarded_and_reported() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_trunk(&sandbox.path_bin(), 0);
    fs::write(
        sandbox.project().join("logmark-build.yml"),
        "dist_dir: public\n",
    )
    .unwrap();

    sandbox
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Files are in ./public/"));

    assert_eq!(
        sandbox.marker_lines("trunk-invocations"),
        ["build --release --dist public"]
    );
}

#[test]
fn config_trunk_args_are_appended() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_trunk(&sandbox.path_bin(), 0);
    fs::write(
        sandbox.project().join("logmark-build.yml"),
        "trunk_args:\n  - --public-url\n  - /logmark/\n",
    )
    .unwrap();

    sandbox.cmd().assert().success();

    assert_eq!(
        sandbox.marker_lines("trunk-invocations"),
        ["build --release --public-url /logmark/"]
    );
}

// --- Serve ---

#[test]
fn serve_invokes_the_dev_server() {
    let sandbox = Sandbox::new();
    sandbox.install_fake_trunk(&sandbox.path_bin(), 0);

    sandbox.cmd().arg("serve").assert().success();

    assert_eq!(sandbox.marker_lines("trunk-invocations"), ["serve"]);
}
