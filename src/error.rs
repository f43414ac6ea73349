// src/error.rs
use std::{path::PathBuf, process::ExitStatus};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
  #[error("IO Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Please specify the project directory, e.g. `minimal-react my-app`")]
  MissingProjectName,

  #[error("Cannot derive a package name from '{0}'")]
  InvalidProjectName(String),

  #[error("Target directory already exists: {0}")]
  TargetExists(PathBuf),

  #[error("Failed to create directory '{path}': {source}")]
  DirCreation {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to write file '{path}': {source}")]
  FileWrite {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Could not serialize package manifest: {0}")]
  ManifestSerialize(#[from] serde_json::Error),

  #[error("Package manager '{program}' not found on PATH")]
  PackageManagerNotFound { program: String },

  #[error("Installing '{package}' failed with status {status}. Stderr: {stderr}")]
  InstallFailedStatus {
    package: String,
    status: ExitStatus, // Store the actual status
    stdout: String,
    stderr: String,
  },

  #[error("Could not run the installer for '{package}': {source}")]
  InstallExecError {
    package: String,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>, // Box to handle different error types
  },

  #[error("{} package(s) failed to install: {}", .packages.len(), .packages.join(", "))]
  InstallFailures { packages: Vec<String> },
}
