//! Interactive prompt: reads URLs from standard input until the user quits.

use crate::{analyzer, report};
use anyhow::Result;
use console::style;
use std::io::{self, BufRead, Write};

/// Words that end the session, compared after trimming and lowercasing.
const QUIT_WORDS: [&str; 2] = ["exit", "quit"];

fn is_quit_word(line: &str) -> bool {
  QUIT_WORDS.contains(&line.trim().to_lowercase().as_str())
}

fn print_banner() {
  println!(
    "{}",
    style("--- Basic URL Phishing Detector ---").bold().cyan()
  );
  println!("Enter a URL to analyze (e.g., www.google.com)");
}

/// Runs the read-analyze-report loop until `exit`/`quit`, end of input, or
/// Ctrl-C. Every path terminates with exit code 0; there is no failing
/// exit from the loop itself.
///
/// # Errors
///
/// Returns an error only if stdin/stdout fail mid-session or the Ctrl-C
/// handler cannot be installed.
pub fn run(json: bool) -> Result<()> {
  ctrlc::set_handler(|| {
    println!("\nExiting.");
    std::process::exit(0);
  })?;

  print_banner();

  let stdin = io::stdin();
  let mut lines = stdin.lock().lines();

  loop {
    print!("\nEnter URL: ");
    io::stdout().flush()?;

    let Some(line) = lines.next() else {
      // End of input behaves like an interrupt: leave quietly.
      println!("\nExiting.");
      break;
    };
    let line = line?;

    if is_quit_word(&line) {
      break;
    }

    let analysis = analyzer::analyze(&line);
    if json {
      report::print_json(&analysis)?;
    } else {
      report::print_human_readable(&analysis);
    }
  }

  Ok(())
}
