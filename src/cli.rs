use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "lure", version)]
#[command(
  about = "Score a URL for common phishing indicators.",
  long_about = "A command-line utility that inspects a URL string for surface-level phishing indicators (IP-literal hosts, excessive length, '@' obfuscation, deep subdomains, hyphenated hostnames, suspicious keywords) and prints a heuristic verdict. Run without arguments to start an interactive prompt."
)]
pub struct Cli {
  /// The URL to analyze. When omitted, an interactive prompt is started.
  pub url: Option<String>,

  /// Output the analysis in JSON format instead of human-readable text.
  #[arg(long)]
  pub json: bool,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn make_args(args: &[&str]) -> Vec<String> {
    std::iter::once("lure".to_string())
      .chain(args.iter().map(std::string::ToString::to_string))
      .collect()
  }

  #[test]
  fn test_basic_target() {
    let args = make_args(&["www.google.com"]);
    let cli = Cli::try_parse_from(args).expect("Should parse basic target");
    assert_eq!(cli.url.as_deref(), Some("www.google.com"));
    assert!(!cli.json);
  }

  #[test]
  fn test_no_target_starts_interactive() {
    let args = make_args(&[]);
    let cli = Cli::try_parse_from(args).expect("Should parse without a target");
    assert!(cli.url.is_none());
  }

  #[test]
  fn test_json_flag() {
    let args = make_args(&["example.com", "--json"]);
    let cli = Cli::try_parse_from(args).expect("Should parse --json flag");
    assert!(cli.json);
    assert_eq!(cli.url.as_deref(), Some("example.com"));
  }

  #[test]
  fn test_json_flag_without_target() {
    let args = make_args(&["--json"]);
    let cli =
      Cli::try_parse_from(args).expect("Should parse --json without a target");
    assert!(cli.json);
    assert!(cli.url.is_none());
  }

  #[test]
  fn test_ip_as_target() {
    let args = make_args(&["192.168.1.1/login"]);
    let cli =
      Cli::try_parse_from(args).expect("Should parse IP address as target");
    assert_eq!(cli.url.as_deref(), Some("192.168.1.1/login"));
  }

  #[test]
  fn test_unknown_flag_fails() {
    let args = make_args(&["example.com", "--verbose"]);
    assert!(Cli::try_parse_from(args).is_err());
  }
}
