// src/project.rs
use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::ScaffoldError;

/// What the user asked for, captured once from the command line.
/// Immutable for the rest of the run.
#[derive(Debug, Clone)]
pub struct ProjectRequest {
  pub name: String,
  pub use_typescript: bool,
}

impl ProjectRequest {
  pub fn new(name: String, use_typescript: bool) -> Self {
    Self {
      name,
      use_typescript,
    }
  }
}

/// Absolute target location plus the package name derived from it.
#[derive(Debug, Clone)]
pub struct ResolvedProject {
  pub root: PathBuf,
  pub package_name: String,
}

/// Resolves the requested name to an absolute target path and derives the
/// leaf component as the package name. Mirrors `path.resolve` followed by
/// `path.basename`: relative inputs are anchored at the current working
/// directory and `.`/`..` segments are collapsed lexically.
pub fn resolve_target(name: &str) -> Result<ResolvedProject, ScaffoldError> {
  if name.is_empty() {
    return Err(ScaffoldError::MissingProjectName);
  }

  let raw = Path::new(name);
  let absolute = if raw.is_absolute() {
    raw.to_path_buf()
  } else {
    env::current_dir().map_err(ScaffoldError::Io)?.join(raw)
  };
  let root = normalize(&absolute);

  let package_name = root
    .file_name()
    .and_then(|n| n.to_str())
    .map(str::to_string)
    .ok_or_else(|| ScaffoldError::InvalidProjectName(name.to_string()))?;

  Ok(ResolvedProject { root, package_name })
}

/// Collapses `.` and `..` components without touching the filesystem.
/// `..` at the root is dropped, like `path.resolve` does.
fn normalize(path: &Path) -> PathBuf {
  let mut out = PathBuf::new();
  for component in path.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => {
        out.pop();
      }
      other => out.push(other),
    }
  }
  out
}
