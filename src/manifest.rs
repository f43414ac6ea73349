// src/manifest.rs
use serde::Serialize;

use crate::error::ScaffoldError;

/// The `package.json` we write into a fresh project. Written once,
/// never read back.
#[derive(Debug, Serialize)]
pub struct PackageManifest {
  pub name: String,
  pub version: String,
  pub private: bool,
  pub scripts: Scripts,
}

#[derive(Debug, Serialize)]
pub struct Scripts {
  pub dev: String,
}

pub const MANIFEST_VERSION: &str = "0.1.0";
pub const DEV_SCRIPT: &str = "webpack serve --open";

impl PackageManifest {
  pub fn new(package_name: &str) -> Self {
    Self {
      name: package_name.to_string(),
      version: MANIFEST_VERSION.to_string(),
      private: true,
      scripts: Scripts {
        dev: DEV_SCRIPT.to_string(),
      },
    }
  }

  /// Pretty-printed JSON plus a trailing newline.
  pub fn render(&self) -> Result<String, ScaffoldError> {
    let mut rendered = serde_json::to_string_pretty(self)?;
    rendered.push('\n');
    Ok(rendered)
  }
}
