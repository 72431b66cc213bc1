//! Interactive form controller
//!
//! Terminal rendering of the release form: current version in the header,
//! an editable target version pre-filled with the computed increment, an
//! editable commit message kept in sync with the version, and two guarded
//! actions (release, local APK build). All state lives in this one struct
//! and is only ever touched by the UI thread.

use crate::build;
use crate::core::context::ProjectContext;
use crate::core::error::{ReleaseResult, print_error};
use crate::manifest;
use crate::ui::{Phase, header_style, dim_style, print_status, prompt};
use crate::vcs::release_ops::tag_name;
use crate::vcs::SystemGit;

/// Form state for one release session
pub struct ReleaseApp {
  ctx: ProjectContext,
  git: SystemGit,
  current: String,
  version: String,
  message: String,
  status: Phase,
}

/// What the controller should do after an action completes
enum Flow {
  Continue,
  Exit,
}

impl ReleaseApp {
  /// Build the form state: read the current version and pre-fill the
  /// target version and commit message from it.
  pub fn new(ctx: ProjectContext) -> ReleaseResult<Self> {
    let git = SystemGit::open(&ctx.root)?;
    let current = manifest::read_version(&ctx)?;
    let version = manifest::increment_version(&current)?;
    let message = default_message(&version);

    Ok(Self {
      ctx,
      git,
      current,
      version,
      message,
      status: Phase::Ready,
    })
  }

  /// Run the form loop until the operator quits or a release succeeds
  pub fn run(&mut self) -> ReleaseResult<()> {
    self.print_header()?;

    loop {
      self.print_state();

      let choice = prompt::choice("[r]elease  [b]uild local APK  [v]ersion  [m]essage  [q]uit")?;
      match choice.as_str() {
        "r" | "release" => {
          if let Flow::Exit = self.release()? {
            return Ok(());
          }
        }
        "b" | "build" => self.build_local()?,
        "v" | "version" => {
          self.version = prompt::input("New version", &self.version)?;
          // The message field follows every version change
          self.message = default_message(&self.version);
        }
        "m" | "message" => {
          self.message = prompt::input("Commit message", &self.message)?;
        }
        "q" | "quit" => return Ok(()),
        other => println!("Unknown choice: '{}'", other),
      }
      println!();
    }
  }

  fn print_header(&self) -> ReleaseResult<()> {
    let header = header_style();
    let branch = self.git.current_branch()?;

    println!("{}🚀 Release Helper{}", header.render(), header.render_reset());
    println!("Current Version: {}  (branch: {})", self.current, branch);
    println!();
    Ok(())
  }

  fn print_state(&self) {
    println!("New Version:     {}", self.version);
    println!("Commit Message:  {}", self.message);
    print_status(self.status);
  }

  /// Guarded release action: validate, confirm, then run the sequence
  fn release(&mut self) -> ReleaseResult<Flow> {
    if let Err(reason) = validate_inputs(&self.version, &self.message) {
      println!("\n❌ {}", reason);
      return Ok(Flow::Continue);
    }

    println!("\nThis will start the GitHub release process:\n");
    println!("  1. Update version to {}", self.version);
    println!("  2. Commit: {}", self.message);
    println!("  3. Create tag {}", tag_name(&self.version));
    println!("  4. Push to GitHub (triggers auto-releases)");
    println!();

    if !prompt::confirm("Continue?")? {
      return Ok(Flow::Continue);
    }

    self.status = Phase::UpdatingVersion;
    print_status(self.status);

    match self.try_release() {
      Ok(message) => {
        println!("\n✅ {}", message);
        println!("GitHub will now build the Windows and Android versions automatically.");
        Ok(Flow::Exit)
      }
      Err(err) => {
        print_error(&err);
        self.status = Phase::Failed;
        print_status(self.status);
        Ok(Flow::Continue)
      }
    }
  }

  fn try_release(&mut self) -> ReleaseResult<String> {
    manifest::update_version(&self.ctx, &self.version)?;

    self.status = Phase::PushingToGitHub;
    print_status(self.status);

    self.git.release(&self.version, &self.message)
  }

  /// Guarded local build action
  fn build_local(&mut self) -> ReleaseResult<()> {
    let dim = dim_style();
    println!("\nThis will build the APK on this machine (takes a few minutes).");
    println!(
      "{}Note: GitHub already builds this automatically during release.{}",
      dim.render(),
      dim.render_reset()
    );

    if !prompt::confirm("Continue?")? {
      return Ok(());
    }

    self.status = Phase::BuildingApk;
    print_status(self.status);

    match build::build_apk(&self.ctx) {
      Ok(message) => {
        println!("\n✅ {}", message);
        self.status = Phase::Ready;
      }
      Err(err) => {
        print_error(&err);
        self.status = Phase::Failed;
      }
    }

    print_status(self.status);
    Ok(())
  }
}

/// Release requires both fields to be non-empty; nothing else is validated
/// here (a bad semver string is allowed through on purpose).
fn validate_inputs(version: &str, message: &str) -> Result<(), &'static str> {
  if version.trim().is_empty() || message.trim().is_empty() {
    return Err("Version and commit message are required");
  }
  Ok(())
}

/// Default commit message for a target version
fn default_message(version: &str) -> String {
  format!("Release v{}", version)
}
