#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use anyhow::Result;

mod app;
mod cli;
mod repl;
mod report;

pub mod analyzer;

/// Runs the main application logic.
///
/// This function parses command-line arguments and either scores a single
/// URL passed as an argument or starts the interactive prompt, printing
/// the report in human-readable or JSON form.
///
/// # Errors
///
/// Returns an error if writing the report to stdout fails or if the
/// analysis cannot be serialized to JSON.
pub fn run() -> Result<()> {
  app::App::new().run()
}
