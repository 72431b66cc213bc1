use clap::Parser;
use release_helper::app::ReleaseApp;
use release_helper::core::context::ProjectContext;
use release_helper::core::error::{ReleaseError, print_error};

/// Interactive release helper: bump the version, tag, push, build
///
/// Run from the root of the Tauri project. There are no flags; the helper
/// goes straight into the interactive form.
#[derive(Parser)]
#[command(name = "release-helper")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let _cli = Cli::parse();

  let project_root = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => {
      eprintln!("Error: Failed to get current directory: {}", e);
      std::process::exit(1);
    }
  };

  let result = ProjectContext::build(&project_root)
    .and_then(ReleaseApp::new)
    .and_then(|mut app| app.run());

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: ReleaseError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
