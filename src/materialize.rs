// src/materialize.rs
use std::fs;
use std::path::{Path, PathBuf};

use log::trace;

use crate::error::ScaffoldError;

/// Writes the generated tree under one project root. The root is carried
/// explicitly; nothing here changes the process working directory.
/// Writes are not atomic: a failure mid-pipeline leaves whatever was
/// already written in place, with no marker and no cleanup.
#[derive(Debug)]
pub struct Materializer {
  root: PathBuf,
}

impl Materializer {
  pub fn new(root: PathBuf) -> Self {
    Self { root }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Creates the project root, intermediate components included.
  /// The caller checks for pre-existence first; this only maps raw IO
  /// failures (permissions, disk space) to `DirCreation`.
  pub fn create_root(&self) -> Result<(), ScaffoldError> {
    trace!("Creating project root: {}", self.root.display());
    fs::create_dir_all(&self.root).map_err(|e| ScaffoldError::DirCreation {
      path: self.root.clone(),
      source: e,
    })
  }

  pub fn mkdir(&self, relative: &str) -> Result<(), ScaffoldError> {
    let path = self.root.join(relative);
    trace!("Creating directory: {}", path.display());
    fs::create_dir(&path).map_err(|e| ScaffoldError::DirCreation { path, source: e })
  }

  pub fn write(&self, relative: &str, contents: &str) -> Result<(), ScaffoldError> {
    let path = self.root.join(relative);
    trace!("Writing file: {}", path.display());
    fs::write(&path, contents).map_err(|e| ScaffoldError::FileWrite { path, source: e })
  }
}
