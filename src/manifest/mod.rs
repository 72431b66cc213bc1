//! Version accessor for the two project manifests
//!
//! The project version lives in two places that must never drift apart:
//! `src-tauri/tauri.conf.json` and `package.json`. Reads go through a minimal
//! typed view; writes go through `serde_json::Value` so every unrelated field
//! survives a rewrite untouched (key order included, via `preserve_order`).

use crate::core::context::ProjectContext;
use crate::core::error::{ConfigError, ReleaseError, ReleaseResult};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Minimal view of tauri.conf.json (everything else is opaque)
#[derive(Debug, Deserialize)]
struct TauriConf {
  #[serde(default)]
  version: Option<String>,
}

/// Read the current version from tauri.conf.json.
///
/// A missing `version` field falls back to `1.0.0`, matching what the rest
/// of the Tauri tooling assumes for an unversioned project.
pub fn read_version(ctx: &ProjectContext) -> ReleaseResult<String> {
  let path = ctx.tauri_conf();
  let raw = fs::read_to_string(&path)?;
  let conf: TauriConf = serde_json::from_str(&raw).map_err(|e| malformed(&path, e))?;

  Ok(conf.version.unwrap_or_else(|| "1.0.0".to_string()))
}

/// Compute the default next version by bumping the final dot-separated
/// numeric component: `1.0.14` → `1.0.15`, `2.9.0` → `2.9.1`.
///
/// The final segment must parse as an integer; anything else (`1.0.beta`,
/// an empty string) is an error rather than a silently invalid version.
pub fn increment_version(version: &str) -> ReleaseResult<String> {
  let (head, tail) = match version.rsplit_once('.') {
    Some((head, tail)) => (Some(head), tail),
    None => (None, version),
  };

  let patch: u64 = tail.trim().parse().map_err(|_| {
    ReleaseError::message(format!(
      "Cannot increment version '{}': final segment '{}' is not an integer",
      version, tail
    ))
  })?;
  let next = patch.checked_add(1).ok_or_else(|| {
    ReleaseError::message(format!(
      "Cannot increment version '{}': final segment '{}' is out of range",
      version, tail
    ))
  })?;

  Ok(match head {
    Some(head) => format!("{}.{}", head, next),
    None => next.to_string(),
  })
}

/// Write `new_version` into both manifests, leaving every other field
/// unchanged.
///
/// Both files are read and parsed before either is written, so a malformed
/// manifest aborts the whole update with no partial write.
pub fn update_version(ctx: &ProjectContext, new_version: &str) -> ReleaseResult<()> {
  let tauri_path = ctx.tauri_conf();
  let pkg_path = ctx.package_json();

  let tauri_raw = fs::read_to_string(&tauri_path)?;
  let pkg_raw = fs::read_to_string(&pkg_path)?;

  let mut tauri: Value = serde_json::from_str(&tauri_raw).map_err(|e| malformed(&tauri_path, e))?;
  let mut pkg: Value = serde_json::from_str(&pkg_raw).map_err(|e| malformed(&pkg_path, e))?;

  set_version_field(&mut tauri, &tauri_path, new_version)?;
  set_version_field(&mut pkg, &pkg_path, new_version)?;

  fs::write(&tauri_path, serde_json::to_string_pretty(&tauri)?)?;
  fs::write(&pkg_path, serde_json::to_string_pretty(&pkg)?)?;

  Ok(())
}

fn set_version_field(manifest: &mut Value, path: &Path, new_version: &str) -> ReleaseResult<()> {
  match manifest.as_object_mut() {
    Some(obj) => {
      obj.insert("version".to_string(), Value::String(new_version.to_string()));
      Ok(())
    }
    None => Err(ReleaseError::Config(ConfigError::NotAnObject {
      path: path.to_path_buf(),
    })),
  }
}

fn malformed(path: &Path, err: serde_json::Error) -> ReleaseError {
  ReleaseError::Config(ConfigError::Malformed {
    path: path.to_path_buf(),
    message: err.to_string(),
  })
}
