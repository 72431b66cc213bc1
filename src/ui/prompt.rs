//! Line-oriented prompts for the interactive form
//!
//! All reads come from stdin on the single UI thread; external commands
//! block the loop for their full duration, which is acceptable here.

use crate::ui::dim_style;
use std::io::{self, BufRead, Write};

/// Prompt for a line of input with a pre-filled default.
///
/// An empty answer keeps the default, mirroring an editable form field that
/// the operator left alone.
pub fn input(label: &str, default: &str) -> io::Result<String> {
  let dim = dim_style();
  print!("{} {}[{}]{}: ", label, dim.render(), default, dim.render_reset());
  io::stdout().flush()?;

  let line = read_line()?;
  let trimmed = line.trim();

  Ok(if trimmed.is_empty() {
    default.to_string()
  } else {
    trimmed.to_string()
  })
}

/// Ask a yes/no question; defaults to "no"
pub fn confirm(question: &str) -> io::Result<bool> {
  print!("{} [y/N]: ", question);
  io::stdout().flush()?;

  let line = read_line()?;
  Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Prompt for a single menu choice (lowercased)
pub fn choice(label: &str) -> io::Result<String> {
  print!("{}: ", label);
  io::stdout().flush()?;

  let line = read_line()?;
  Ok(line.trim().to_lowercase())
}

fn read_line() -> io::Result<String> {
  let mut line = String::new();
  io::stdin().lock().read_line(&mut line)?;
  Ok(line)
}
