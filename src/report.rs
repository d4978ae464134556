use crate::analyzer::{Analysis, Verdict};
use anyhow::{Context, Result};
use console::{style, Style};

/// Helper: coloured verdict so the tier is easy to spot.
fn verdict_style(verdict: Verdict) -> Style {
  match verdict {
    Verdict::Legitimate => Style::new().green().bold(),
    Verdict::Suspicious => Style::new().yellow().bold(),
    Verdict::HighRisk => Style::new().red().bold(),
  }
}

/// Prints the human-readable report block for one analysis.
///
/// Pure presentation over the scorer output; no scoring logic lives here,
/// so the scorer stays independently testable.
pub fn print_human_readable(analysis: &Analysis) {
  println!("\n--- Analysis Report ---");
  if analysis.findings.is_empty() {
    println!("{}", style("No immediate red flags found.").green());
  } else {
    for (i, finding) in analysis.findings.iter().enumerate() {
      println!("[{}] {}", i + 1, style(finding).yellow());
    }
  }

  println!("\nFinal Phishing Score: {}", style(analysis.score).bold());
  println!(
    "Verdict: {}",
    verdict_style(analysis.verdict).apply_to(analysis.verdict.label())
  );
  println!("-----------------------");
}

pub fn print_json(analysis: &Analysis) -> Result<()> {
  serde_json::to_string_pretty(analysis)
    .map(|s| println!("{s}"))
    .context("Failed to serialize analysis to JSON")
}
