//! System git backend
//!
//! Every operation is a blocking subprocess running with the project root as
//! working directory and an isolated environment (global user config is not
//! trusted). Success means a zero exit status; failure carries the captured
//! diagnostic text of the failing command.

use crate::core::error::{GitError, ReleaseError, ReleaseResult, ResultExt};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Git backend using system git
#[derive(Debug)]
pub struct SystemGit {
  /// Repository working directory
  pub(crate) repo_path: PathBuf,
}

impl SystemGit {
  /// Open a git repository.
  ///
  /// This performs one subprocess call to verify the path is inside a
  /// working tree before any release step runs.
  pub fn open(path: &Path) -> ReleaseResult<Self> {
    let output = Command::new("git")
      .arg("-C")
      .arg(path)
      .args(["rev-parse", "--show-toplevel"])
      .output()
      .context("Failed to execute git rev-parse")?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      if stderr.contains("not a git repository") {
        return Err(ReleaseError::Git(GitError::RepoNotFound {
          path: path.to_path_buf(),
        }));
      }
      return Err(ReleaseError::message(format!(
        "Failed to open git repository: {}",
        stderr
      )));
    }

    Ok(Self {
      repo_path: path.to_path_buf(),
    })
  }

  /// Get current branch name
  pub fn current_branch(&self) -> ReleaseResult<String> {
    let output = self
      .git_cmd()
      .args(["rev-parse", "--abbrev-ref", "HEAD"])
      .output()
      .context("Failed to get current branch")?;

    if !output.status.success() {
      return Ok("HEAD".to_string()); // Detached HEAD
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  /// Run a git subcommand to completion, mapping a non-zero exit to a
  /// `GitError::CommandFailed` carrying the command line and its output.
  pub(crate) fn run(&self, args: &[&str]) -> ReleaseResult<()> {
    let output = self
      .git_cmd()
      .args(args)
      .output()
      .with_context(|| format!("Failed to execute git {}", args.join(" ")))?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      // Some git failures (e.g. "nothing to commit") report on stdout
      let detail = if stderr.trim().is_empty() {
        String::from_utf8_lossy(&output.stdout).to_string()
      } else {
        stderr.to_string()
      };
      return Err(ReleaseError::Git(GitError::CommandFailed {
        command: format!("git {}", args.join(" ")),
        stderr: detail,
      }));
    }

    Ok(())
  }

  /// Create a safe git command with isolated environment
  ///
  /// - Sets working directory to repo path
  /// - Clears environment variables
  /// - Whitelists only PATH and HOME
  /// - Adds safe configuration overrides
  pub(crate) fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    cmd.arg("-C").arg(&self.repo_path);

    // Isolated environment (don't trust global config)
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    // Force safe behavior (override user config)
    cmd.arg("-c").arg("protocol.version=2");
    cmd.arg("-c").arg("advice.detachedHead=false");

    cmd
  }
}
