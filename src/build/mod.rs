//! Local Android APK build runner
//!
//! Runs the project's `android:build:release` npm script, then collects the
//! APK Gradle produced. The Tauri Android pipeline has moved its output
//! around between versions, so three candidate locations are probed in
//! order and the first hit is copied to a stable filename in the project
//! root for manual sideloading.

use crate::core::context::ProjectContext;
use crate::core::error::{BuildError, ReleaseError, ReleaseResult, ResultExt};
use std::path::PathBuf;
use std::process::Command;

/// Destination filename for the collected APK, in the project root
pub const OUTPUT_APK: &str = "app-release.apk";

/// Candidate APK locations, probed in order (newest Tauri layout first)
pub const APK_CANDIDATES: [&str; 3] = [
  "src-tauri/gen/android/app/build/outputs/apk/universal/release/app-universal-release-unsigned.apk",
  "src-tauri/gen/android/app/build/outputs/apk/release/app-release-unsigned.apk",
  "src-tauri/gen/android/app/build/outputs/apk/debug/app-debug.apk",
];

#[cfg(windows)]
const NPM: &str = "npm.cmd";
#[cfg(not(windows))]
const NPM: &str = "npm";

/// Build the APK locally and copy it into the project root.
///
/// Returns the success message to show the operator. If the build command
/// fails, no artifact probing happens at all.
pub fn build_apk(ctx: &ProjectContext) -> ReleaseResult<String> {
  run_build_command(ctx)?;
  collect_artifact(ctx)?;

  Ok(format!("APK built and copied to {}", OUTPUT_APK))
}

/// Run `npm run android:build:release` in the project root
fn run_build_command(ctx: &ProjectContext) -> ReleaseResult<()> {
  let output = Command::new(NPM)
    .args(["run", "android:build:release"])
    .current_dir(&ctx.root)
    .output()
    .context("Failed to execute npm")?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    return Err(ReleaseError::Build(BuildError::CommandFailed {
      command: format!("{} run android:build:release", NPM),
      stderr: stderr.to_string(),
    }));
  }

  Ok(())
}

/// Probe the candidate output paths and copy the first existing APK to
/// [`OUTPUT_APK`], overwriting any prior copy.
///
/// When nothing is found, the error names only the last candidate probed,
/// matching the tooling this replaced.
pub fn collect_artifact(ctx: &ProjectContext) -> ReleaseResult<PathBuf> {
  for candidate in APK_CANDIDATES {
    let probed = ctx.root.join(candidate);
    if probed.is_file() {
      let dest = ctx.root.join(OUTPUT_APK);
      std::fs::copy(&probed, &dest).with_context(|| format!("Failed to copy APK to {}", dest.display()))?;
      return Ok(dest);
    }
  }

  Err(ReleaseError::Build(BuildError::ArtifactNotFound {
    path: ctx.root.join(APK_CANDIDATES[APK_CANDIDATES.len() - 1]),
  }))
}
