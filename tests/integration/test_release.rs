//! Integration tests for the version update + git release sequence

use crate::helpers::TestProject;
use anyhow::Result;
use release_helper::manifest;
use release_helper::vcs::SystemGit;
use serde_json::Value;

#[test]
fn test_full_release_sequence() -> Result<()> {
  let project = TestProject::new()?;
  let ctx = project.context()?;

  let current = manifest::read_version(&ctx).map_err(|e| anyhow::anyhow!("{}", e))?;
  assert_eq!(current, "1.0.14");

  let next = manifest::increment_version(&current).map_err(|e| anyhow::anyhow!("{}", e))?;
  assert_eq!(next, "1.0.15");

  manifest::update_version(&ctx, &next).map_err(|e| anyhow::anyhow!("{}", e))?;

  let before = project.remote_main_head()?;

  let git = SystemGit::open(&project.path).map_err(|e| anyhow::anyhow!("{}", e))?;
  let message = git
    .release(&next, "Release v1.0.15")
    .map_err(|e| anyhow::anyhow!("{}", e))?;
  assert_eq!(message, "Successfully released v1.0.15!");

  // Tag exists locally and on origin
  assert!(project.local_tags()?.contains(&"v1.0.15".to_string()));
  assert!(project.remote_tags()?.contains(&"v1.0.15".to_string()));

  // The release commit was pushed to main
  assert_ne!(project.remote_main_head()?, before);

  // Both manifests carry the same new version, other fields intact
  let tauri: Value = serde_json::from_str(&project.read_file("src-tauri/tauri.conf.json")?)?;
  let pkg: Value = serde_json::from_str(&project.read_file("package.json")?)?;
  assert_eq!(tauri["version"], "1.0.15");
  assert_eq!(pkg["version"], "1.0.15");
  assert_eq!(tauri["productName"], "demo-app");
  assert_eq!(pkg["scripts"]["dev"], "vite");

  Ok(())
}

#[test]
fn test_failed_step_stops_sequence() -> Result<()> {
  let project = TestProject::new()?;

  // Clean working tree: staging is a no-op and the commit step fails
  let git = SystemGit::open(&project.path).map_err(|e| anyhow::anyhow!("{}", e))?;
  let err = git.release("1.0.15", "Release v1.0.15").unwrap_err();

  // The failure carries the underlying git output
  let text = err.to_string();
  assert!(text.contains("git commit"), "unexpected error: {}", text);
  assert!(text.contains("nothing to commit"), "unexpected error: {}", text);

  // The later steps never ran: no tag anywhere
  assert!(project.local_tags()?.is_empty());
  assert!(project.remote_tags()?.is_empty());

  Ok(())
}

#[test]
fn test_release_is_not_rolled_back_after_push_failure() -> Result<()> {
  let project = TestProject::new()?;
  let ctx = project.context()?;

  // Point origin somewhere that does not exist so the push step fails
  crate::helpers::git(&project.path, &["remote", "set-url", "origin", "/nonexistent/origin.git"])?;

  manifest::update_version(&ctx, "1.0.15").map_err(|e| anyhow::anyhow!("{}", e))?;

  let git = SystemGit::open(&project.path).map_err(|e| anyhow::anyhow!("{}", e))?;
  let err = git.release("1.0.15", "Release v1.0.15").unwrap_err();
  assert!(err.to_string().contains("git push"), "unexpected error: {}", err);

  // The commit that landed before the failing push stays in place
  let log = crate::helpers::git(&project.path, &["log", "-1", "--format=%s"])?;
  assert_eq!(String::from_utf8_lossy(&log.stdout).trim(), "Release v1.0.15");

  // And the tag step was never reached
  assert!(project.local_tags()?.is_empty());

  Ok(())
}

#[test]
fn test_open_rejects_non_repository() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let err = SystemGit::open(dir.path()).unwrap_err();
  assert!(err.to_string().contains("Git repository not found"));
  Ok(())
}

#[test]
fn test_current_branch() -> Result<()> {
  let project = TestProject::new()?;
  let git = SystemGit::open(&project.path).map_err(|e| anyhow::anyhow!("{}", e))?;
  assert_eq!(git.current_branch().map_err(|e| anyhow::anyhow!("{}", e))?, "main");
  Ok(())
}

#[test]
fn test_release_with_pending_changes_only_needs_one_commit() -> Result<()> {
  let project = TestProject::new()?;
  let ctx = project.context()?;

  // Unstaged edits beyond the manifests are swept into the release commit
  project.write_file("README.md", "# demo-app\n")?;
  manifest::update_version(&ctx, "1.0.15").map_err(|e| anyhow::anyhow!("{}", e))?;

  let git = SystemGit::open(&project.path).map_err(|e| anyhow::anyhow!("{}", e))?;
  git
    .release("1.0.15", "Release v1.0.15")
    .map_err(|e| anyhow::anyhow!("{}", e))?;

  let show = crate::helpers::git(&project.path, &["show", "--stat", "--format=", "HEAD"])?;
  let stat = String::from_utf8_lossy(&show.stdout).to_string();
  assert!(stat.contains("README.md"));
  assert!(stat.contains("package.json"));

  Ok(())
}
