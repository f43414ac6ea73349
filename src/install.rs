use std::io::ErrorKind;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::Output;

use duct::cmd;
use indicatif::ProgressBar;
use log::{debug, info, trace, warn};

use crate::error::ScaffoldError;

pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// What to do when a single package fails to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallPolicy {
  /// Stop at the first failing package. This is what the CLI uses: a
  /// project with missing dependencies is not usable.
  Abort,
  /// Keep installing the remaining packages and report every failure at
  /// the end of the run.
  Continue,
}

/// Invokes the external package manager, one blocking `install` command
/// per package, in the given working directory. Installs are sequential
/// and are not retried; versions are whatever the package manager
/// resolves by default.
#[derive(Debug)]
pub struct Installer {
  program: String,
  working_dir: PathBuf,
  policy: InstallPolicy,
}

impl Installer {
  pub fn new(working_dir: &Path) -> Self {
    Self::with_program(DEFAULT_PACKAGE_MANAGER, working_dir)
  }

  pub fn with_program(program: &str, working_dir: &Path) -> Self {
    Self {
      program: program.to_string(),
      working_dir: working_dir.to_path_buf(),
      policy: InstallPolicy::Abort,
    }
  }

  pub fn policy(mut self, policy: InstallPolicy) -> Self {
    self.policy = policy;
    self
  }

  /// Installs a single package. Output is captured, not streamed; the
  /// exit status decides success.
  pub fn install(&self, package: &str) -> Result<(), ScaffoldError> {
    info!("Installing '{}' with {}...", package, self.program);
    let output = self.run_install_command(package)?;

    if !output.status.success() {
      let stderr_string = String::from_utf8_lossy(&output.stderr).to_string();
      let stdout_string = String::from_utf8_lossy(&output.stdout).to_string();
      let status_display = output
        .status
        .code()
        .map(|c| c.to_string())
        .or_else(|| output.status.signal().map(|s| format!("signal {}", s)))
        .unwrap_or_else(|| "unknown".to_string());
      warn!(
        "Installing '{}' failed with status: {}. Stderr: {}",
        package,
        status_display,
        stderr_string.lines().next().unwrap_or("<empty stderr>")
      );
      return Err(ScaffoldError::InstallFailedStatus {
        package: package.to_string(),
        status: output.status,
        stdout: stdout_string,
        stderr: stderr_string,
      });
    }

    debug!("Installed '{}'.", package);
    Ok(())
  }

  /// Installs every package in list order, driving the progress bar.
  ///
  /// Returns the names of packages that failed. Under `Abort` the first
  /// failure is returned as an error instead, and under either policy a
  /// missing package-manager binary is fatal immediately: every further
  /// install would fail the same way.
  pub fn install_all(
    &self,
    packages: &[&str],
    pb: &ProgressBar,
  ) -> Result<Vec<String>, ScaffoldError> {
    let mut failed: Vec<String> = Vec::new();

    for package in packages {
      pb.set_message(format!("Installing {}", package));
      match self.install(package) {
        Ok(()) => {}
        Err(e @ ScaffoldError::PackageManagerNotFound { .. }) => return Err(e),
        Err(e) => match self.policy {
          InstallPolicy::Abort => return Err(e),
          InstallPolicy::Continue => {
            warn!("Continuing past failed install of '{}': {}", package, e);
            failed.push(package.to_string());
          }
        },
      }
      pb.inc(1);
    }

    Ok(failed)
  }

  fn run_install_command(&self, package: &str) -> Result<Output, ScaffoldError> {
    trace!(
      "Executing: `{} install {}` in {}",
      self.program,
      package,
      self.working_dir.display()
    );

    let expression = cmd(self.program.as_str(), ["install", package])
      .dir(&self.working_dir)
      .stdout_capture() // duct reads both pipes in background threads
      .stderr_capture()
      .unchecked(); // Ok(Output) on non-zero exit, inspected above

    match expression.run() {
      Ok(output) => Ok(output),
      Err(e) if e.kind() == ErrorKind::NotFound => Err(ScaffoldError::PackageManagerNotFound {
        program: self.program.clone(),
      }),
      Err(e) => Err(ScaffoldError::InstallExecError {
        package: package.to_string(),
        source: Box::new(e),
      }),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use std::os::unix::fs::PermissionsExt;

  // A stand-in package manager: logs the package it was asked to install
  // and exits with the given code.
  fn stub_package_manager(dir: &Path, exit_code: i32) -> PathBuf {
    let script = dir.join("stub-pm.sh");
    fs::write(
      &script,
      format!(
        "#!/bin/sh\necho \"$2\" >> \"$(dirname \"$0\")/install.log\"\nexit {}\n",
        exit_code
      ),
    )
    .unwrap();
    let mut perms = fs::metadata(&script).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&script, perms).unwrap();
    script
  }

  fn logged_installs(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("install.log"))
      .unwrap_or_default()
      .lines()
      .map(str::to_string)
      .collect()
  }

  #[test]
  fn successful_install_returns_ok() {
    let temp = tempfile::tempdir().unwrap();
    let script = stub_package_manager(temp.path(), 0);
    let installer = Installer::with_program(script.to_str().unwrap(), temp.path());

    installer.install("react").unwrap();
    assert_eq!(logged_installs(temp.path()), vec!["react"]);
  }

  #[test]
  fn failed_install_names_the_package() {
    let temp = tempfile::tempdir().unwrap();
    let script = stub_package_manager(temp.path(), 1);
    let installer = Installer::with_program(script.to_str().unwrap(), temp.path());

    let err = installer.install("react").unwrap_err();
    match err {
      ScaffoldError::InstallFailedStatus {
        package, status, ..
      } => {
        assert_eq!(package, "react");
        assert_eq!(status.code(), Some(1));
      }
      other => panic!("expected InstallFailedStatus, got {other:?}"),
    }
  }

  #[test]
  fn missing_package_manager_is_reported_as_such() {
    let temp = tempfile::tempdir().unwrap();
    let installer = Installer::with_program("minimal-react-no-such-binary", temp.path());

    let err = installer.install("react").unwrap_err();
    assert!(matches!(
      err,
      ScaffoldError::PackageManagerNotFound { program } if program == "minimal-react-no-such-binary"
    ));
  }

  #[test]
  fn abort_policy_stops_at_the_first_failure() {
    let temp = tempfile::tempdir().unwrap();
    let script = stub_package_manager(temp.path(), 1);
    let installer = Installer::with_program(script.to_str().unwrap(), temp.path());

    let pb = ProgressBar::hidden();
    let err = installer
      .install_all(&["react", "react-dom"], &pb)
      .unwrap_err();
    assert!(matches!(err, ScaffoldError::InstallFailedStatus { .. }));
    // Only the first package was ever attempted.
    assert_eq!(logged_installs(temp.path()), vec!["react"]);
  }

  #[test]
  fn continue_policy_attempts_every_package_and_aggregates() {
    let temp = tempfile::tempdir().unwrap();
    let script = stub_package_manager(temp.path(), 1);
    let installer = Installer::with_program(script.to_str().unwrap(), temp.path())
      .policy(InstallPolicy::Continue);

    let pb = ProgressBar::hidden();
    let failed = installer.install_all(&["react", "react-dom"], &pb).unwrap();
    assert_eq!(failed, vec!["react", "react-dom"]);
    assert_eq!(logged_installs(temp.path()), vec!["react", "react-dom"]);
  }
}
