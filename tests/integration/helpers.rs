//! Test helpers for integration tests

use anyhow::{Context, Result};
use release_helper::core::context::ProjectContext;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A test Tauri project with git history and a local bare origin
pub struct TestProject {
  _root: TempDir,
  pub path: PathBuf,
  pub remote: PathBuf,
}

impl TestProject {
  /// Create a project with both manifests at version 1.0.14, an initial
  /// commit, and `origin` pointing at a bare repository next to it.
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().join("project");
    let remote = root.path().join("origin.git");
    std::fs::create_dir_all(&path)?;

    git(root.path(), &["init", "--bare", "origin.git"])?;

    git(&path, &["init", "--initial-branch=main"])?;
    git(&path, &["config", "user.name", "Test User"])?;
    git(&path, &["config", "user.email", "test@example.com"])?;
    git(&path, &["remote", "add", "origin", remote.to_str().unwrap()])?;

    std::fs::create_dir_all(path.join("src-tauri"))?;
    std::fs::write(
      path.join("src-tauri/tauri.conf.json"),
      r#"{
  "productName": "demo-app",
  "version": "1.0.14",
  "identifier": "com.example.demo"
}"#,
    )?;
    std::fs::write(
      path.join("package.json"),
      r#"{
  "name": "demo-app",
  "version": "1.0.14",
  "scripts": {
    "dev": "vite"
  }
}"#,
    )?;

    git(&path, &["add", "."])?;
    git(&path, &["commit", "-m", "Initial project setup"])?;
    git(&path, &["push", "-u", "origin", "main"])?;

    Ok(Self {
      _root: root,
      path,
      remote,
    })
  }

  /// Build a ProjectContext rooted at this project
  pub fn context(&self) -> Result<ProjectContext> {
    Ok(ProjectContext::build(&self.path).map_err(|e| anyhow::anyhow!("{}", e))?)
  }

  /// Write a file relative to the project root
  pub fn write_file(&self, rel: &str, content: &str) -> Result<()> {
    std::fs::write(self.path.join(rel), content)?;
    Ok(())
  }

  /// List local tags
  pub fn local_tags(&self) -> Result<Vec<String>> {
    let output = git(&self.path, &["tag", "-l"])?;
    Ok(
      String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect(),
    )
  }

  /// List tags on the bare origin
  pub fn remote_tags(&self) -> Result<Vec<String>> {
    let output = git(&self.remote, &["tag", "-l"])?;
    Ok(
      String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect(),
    )
  }

  /// HEAD of main on the bare origin
  pub fn remote_main_head(&self) -> Result<String> {
    let output = git(&self.remote, &["rev-parse", "main"])?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  /// Read a file relative to the project root
  pub fn read_file(&self, rel: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(rel))?)
  }
}

/// Run git command in a directory
pub fn git(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = Command::new("git")
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run git command")?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    anyhow::bail!("Git command failed: git {}\n{}", args.join(" "), stderr);
  }

  Ok(output)
}
