//! Project context: the fixed paths a release operates on
//!
//! The helper always runs against a Tauri project laid out the standard way,
//! so the context is nothing more than the project root plus the well-known
//! relative locations of the two version manifests. Built once at startup.

use crate::core::error::{ConfigError, ReleaseError, ReleaseResult};
use std::path::{Path, PathBuf};

/// Tauri configuration, relative to the project root
pub const TAURI_CONF: &str = "src-tauri/tauri.conf.json";

/// npm package manifest, relative to the project root
pub const PACKAGE_JSON: &str = "package.json";

/// Paths for a single release run
#[derive(Debug)]
pub struct ProjectContext {
  /// Project root (working directory for every git/npm invocation)
  pub root: PathBuf,
}

impl ProjectContext {
  /// Build a context for the given project root.
  ///
  /// Both manifests must already exist; releasing against a directory that
  /// is missing either one is always operator error.
  pub fn build(root: &Path) -> ReleaseResult<Self> {
    let ctx = Self {
      root: root.to_path_buf(),
    };

    for path in [ctx.tauri_conf(), ctx.package_json()] {
      if !path.is_file() {
        return Err(ReleaseError::Config(ConfigError::ManifestNotFound { path }));
      }
    }

    Ok(ctx)
  }

  /// Absolute path to tauri.conf.json
  pub fn tauri_conf(&self) -> PathBuf {
    self.root.join(TAURI_CONF)
  }

  /// Absolute path to package.json
  pub fn package_json(&self) -> PathBuf {
    self.root.join(PACKAGE_JSON)
  }
}
