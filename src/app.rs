use crate::cli::Cli;
use crate::{analyzer, repl, report};
use anyhow::Result;
use clap::Parser;

pub struct App {
  cli: Cli,
}

impl App {
  #[must_use]
  pub fn new() -> Self {
    Self { cli: Cli::parse() }
  }

  /// Dispatches between single-shot analysis of the positional URL and
  /// the interactive prompt.
  pub fn run(&self) -> Result<()> {
    match self.cli.url.as_deref() {
      Some(url) => {
        let analysis = analyzer::analyze(url);
        if self.cli.json {
          report::print_json(&analysis)
        } else {
          report::print_human_readable(&analysis);
          Ok(())
        }
      }
      None => repl::run(self.cli.json),
    }
  }
}

impl Default for App {
  fn default() -> Self {
    Self::new()
  }
}
