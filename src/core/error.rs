//! Error types for release-helper with contextual messages and exit codes
//!
//! One unified error type categorizes everything that can go wrong during a
//! release: manifest access/parse problems, git command failures, build
//! failures, and plain I/O. Errors that have a useful next step carry a help
//! message shown alongside the failure.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for release-helper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (bad input, missing or malformed manifests)
  User = 1,
  /// System error (git, npm, I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for release-helper
#[derive(Debug)]
pub enum ReleaseError {
  /// Manifest access or parse errors
  Config(ConfigError),

  /// Git operation errors
  Git(GitError),

  /// Local APK build errors
  Build(BuildError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl ReleaseError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    ReleaseError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      ReleaseError::Message { message, context, help } => ReleaseError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      ReleaseError::Config(_) => ExitCode::User,
      ReleaseError::Git(_) => ExitCode::System,
      ReleaseError::Build(_) => ExitCode::System,
      ReleaseError::Io(_) => ExitCode::System,
      ReleaseError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      ReleaseError::Config(e) => e.help_message(),
      ReleaseError::Git(e) => e.help_message(),
      ReleaseError::Build(e) => e.help_message(),
      ReleaseError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for ReleaseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReleaseError::Config(e) => write!(f, "{}", e),
      ReleaseError::Git(e) => write!(f, "{}", e),
      ReleaseError::Build(e) => write!(f, "{}", e),
      ReleaseError::Io(e) => write!(f, "I/O error: {}", e),
      ReleaseError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for ReleaseError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ReleaseError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for ReleaseError {
  fn from(err: io::Error) -> Self {
    ReleaseError::Io(err)
  }
}

impl From<serde_json::Error> for ReleaseError {
  fn from(err: serde_json::Error) -> Self {
    ReleaseError::message(format!("JSON error: {}", err))
  }
}

/// Manifest access and parse errors
#[derive(Debug)]
pub enum ConfigError {
  /// Manifest file not found at its fixed relative path
  ManifestNotFound { path: PathBuf },

  /// Manifest exists but is not well-formed JSON
  Malformed { path: PathBuf, message: String },

  /// Manifest parses but its top level is not a JSON object
  NotAnObject { path: PathBuf },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::ManifestNotFound { .. } => Some(
        "Run release-helper from the root of the Tauri project (the directory holding package.json).".to_string(),
      ),
      ConfigError::Malformed { path, .. } => Some(format!(
        "Fix the JSON syntax in {} before releasing; nothing was written.",
        path.display()
      )),
      _ => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::ManifestNotFound { path } => {
        write!(f, "Manifest not found: {}", path.display())
      }
      ConfigError::Malformed { path, message } => {
        write!(f, "Failed to parse {}: {}", path.display(), message)
      }
      ConfigError::NotAnObject { path } => {
        write!(f, "Expected a JSON object at the top level of {}", path.display())
      }
    }
  }
}

/// Git operation errors
#[derive(Debug)]
pub enum GitError {
  /// Git command failed (non-zero exit)
  CommandFailed { command: String, stderr: String },

  /// Repository not found
  RepoNotFound { path: PathBuf },
}

impl GitError {
  fn help_message(&self) -> Option<String> {
    match self {
      GitError::CommandFailed { stderr, .. } => {
        if stderr.contains("non-fast-forward") {
          Some("The remote has commits you don't have. Pull first, then retry the release.".to_string())
        } else if stderr.contains("permission denied") || stderr.contains("403") {
          Some("Check your SSH key permissions and GitHub access.".to_string())
        } else {
          None
        }
      }
      GitError::RepoNotFound { path } => Some(format!(
        "Initialize the repository first or check the path: {}",
        path.display()
      )),
    }
  }
}

impl fmt::Display for GitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitError::CommandFailed { command, stderr } => {
        write!(f, "Git command failed: {}\n{}", command, stderr)
      }
      GitError::RepoNotFound { path } => {
        write!(f, "Git repository not found at: {}", path.display())
      }
    }
  }
}

/// Local APK build errors
#[derive(Debug)]
pub enum BuildError {
  /// Build command failed (non-zero exit)
  CommandFailed { command: String, stderr: String },

  /// Build succeeded but no artifact was found at any candidate path.
  /// Carries only the last candidate probed.
  ArtifactNotFound { path: PathBuf },
}

impl BuildError {
  fn help_message(&self) -> Option<String> {
    match self {
      BuildError::CommandFailed { .. } => Some(
        "Check that npm and the Tauri Android toolchain are installed and that `npm run android:build:release` works on its own."
          .to_string(),
      ),
      BuildError::ArtifactNotFound { .. } => {
        Some("Look under src-tauri/gen/android/app/build/outputs/apk/ for where Gradle put the APK.".to_string())
      }
    }
  }
}

impl fmt::Display for BuildError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BuildError::CommandFailed { command, stderr } => {
        write!(f, "Build command failed: {}\n{}", command, stderr)
      }
      BuildError::ArtifactNotFound { path } => {
        write!(f, "APK not found at {}", path.display())
      }
    }
  }
}

/// Result type alias for release-helper
pub type ReleaseResult<T> = Result<T, ReleaseError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> ReleaseResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> ReleaseResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<ReleaseError>,
{
  fn context(self, ctx: impl Into<String>) -> ReleaseResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> ReleaseResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &ReleaseError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
