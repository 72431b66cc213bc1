//! The release sequence: stage, commit, push, tag, push tag
//!
//! The sequence is deliberately non-transactional. A failure stops the
//! remaining steps but never rolls back the ones that already ran; a commit
//! that landed before a failed push stays in place for the operator to
//! inspect.

use crate::core::error::ReleaseResult;
use crate::vcs::SystemGit;

/// Branch every release is pushed to
pub const RELEASE_BRANCH: &str = "main";

/// Format the tag name for a version string
pub fn tag_name(version: &str) -> String {
  format!("v{}", version)
}

impl SystemGit {
  /// Stage all pending changes in the working tree
  pub fn stage_all(&self) -> ReleaseResult<()> {
    self.run(&["add", "."])
  }

  /// Commit staged changes with the given message
  pub fn commit(&self, message: &str) -> ReleaseResult<()> {
    self.run(&["commit", "-m", message])
  }

  /// Push a branch to origin
  pub fn push_branch(&self, branch: &str) -> ReleaseResult<()> {
    self.run(&["push", "origin", branch])
  }

  /// Create a lightweight tag at HEAD
  pub fn create_tag(&self, tag: &str) -> ReleaseResult<()> {
    self.run(&["tag", tag])
  }

  /// Push a tag to origin
  pub fn push_tag(&self, tag: &str) -> ReleaseResult<()> {
    self.run(&["push", "origin", tag])
  }

  /// Run the full release sequence for a version.
  ///
  /// Strict order: stage all → commit → push main → tag `v<version>` →
  /// push tag. The first failing step aborts the rest and surfaces that
  /// step's git error text.
  pub fn release(&self, version: &str, message: &str) -> ReleaseResult<String> {
    let tag = tag_name(version);

    self.stage_all()?;
    self.commit(message)?;
    self.push_branch(RELEASE_BRANCH)?;
    self.create_tag(&tag)?;
    self.push_tag(&tag)?;

    Ok(format!("Successfully released {}!", tag))
  }
}
