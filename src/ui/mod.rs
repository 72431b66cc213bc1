//! Terminal front end: status line and interactive prompts

pub mod prompt;

use std::fmt;

/// Phase shown in the status line while the helper works
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
  Ready,
  UpdatingVersion,
  PushingToGitHub,
  BuildingApk,
  Failed,
}

impl fmt::Display for Phase {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = match self {
      Phase::Ready => "Ready",
      Phase::UpdatingVersion => "Updating version...",
      Phase::PushingToGitHub => "Pushing to GitHub...",
      Phase::BuildingApk => "Building Local Android APK...",
      Phase::Failed => "Failed",
    };
    write!(f, "{}", text)
  }
}

impl Phase {
  fn style(self) -> anstyle::Style {
    let color = match self {
      Phase::Failed => anstyle::AnsiColor::Red,
      Phase::Ready => anstyle::AnsiColor::Green,
      _ => anstyle::AnsiColor::Yellow,
    };
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(color)))
  }
}

/// Print the status line for a phase
pub fn print_status(phase: Phase) {
  let style = phase.style();
  println!("{}Status: {}{}", style.render(), phase, style.render_reset());
}

/// Style for section headers
pub fn header_style() -> anstyle::Style {
  anstyle::Style::new()
    .bold()
    .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow)))
}

/// Style for de-emphasized hints
pub fn dim_style() -> anstyle::Style {
  anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::BrightBlack)))
}
