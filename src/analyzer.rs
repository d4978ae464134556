//! Heuristic URL risk scoring.
//!
//! This module is the core of the tool: a pure, synchronous scorer that
//! runs a fixed battery of surface-level phishing checks over one URL
//! string and maps the accumulated score onto a three-tier verdict.
//! It performs no I/O and never fails, whatever the input looks like.

use memchr::memchr;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Keywords frequently seen in credential-phishing URLs, in reporting
/// priority order. At most one keyword contributes to the score: the
/// scan stops at the first match.
pub const SUSPICIOUS_KEYWORDS: [&str; 11] = [
  "login", "verify", "account", "secure", "update", "signin", "banking",
  "password", "confirm", "support", "admin",
];

/// Character count above which the length check fires (strictly greater).
const MAX_URL_CHARS: usize = 75;

/// Dots in a hostname above which the subdomain check fires. Three dots
/// still pass, so hosts like `www.example.co.uk` stay clean.
const MAX_HOSTNAME_DOTS: usize = 3;

static RE_SCHEME: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^(http|https)://").unwrap());

// Deliberately loose: octets are not range-checked, so a host like
// "999.999.999.999" still counts as an IP literal.
static RE_IPV4: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").unwrap());

/// Three-tier verdict derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
  #[serde(rename = "Likely Legitimate")]
  Legitimate,
  #[serde(rename = "Potentially Suspicious")]
  Suspicious,
  #[serde(rename = "High Risk of Phishing")]
  HighRisk,
}

impl Verdict {
  /// Maps a final score onto its verdict tier.
  #[must_use]
  pub const fn from_score(score: usize) -> Self {
    match score {
      0 | 1 => Self::Legitimate,
      2 => Self::Suspicious,
      _ => Self::HighRisk,
    }
  }

  /// The label printed in reports.
  #[must_use]
  pub const fn label(self) -> &'static str {
    match self {
      Self::Legitimate => "Likely Legitimate",
      Self::Suspicious => "Potentially Suspicious",
      Self::HighRisk => "High Risk of Phishing",
    }
  }
}

impl fmt::Display for Verdict {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// Outcome of scoring a single URL.
///
/// Each triggered check appends exactly one finding, so `score` always
/// equals `findings.len()`. Built once per call and discarded; nothing
/// persists between calls.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
  /// The string as the user entered it.
  pub target: String,
  /// The scheme-qualified string the checks ran against.
  pub url: String,
  /// One point per triggered check, 0 to 6.
  pub score: usize,
  /// Human-readable explanations, in check order.
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub findings: Vec<String>,
  pub verdict: Verdict,
}

/// Prepends `http://` when the input carries no explicit scheme, so the
/// string always has an authority to extract a host from. Characters are
/// never removed, only the scheme token is added.
fn normalize(target: &str) -> String {
  if RE_SCHEME.is_match(target) {
    target.to_owned()
  } else {
    format!("http://{target}")
  }
}

/// Host portion of the scheme-qualified URL: the authority with userinfo
/// and port stripped, lowercased. Returns `None` when the string has no
/// usable host; that only disables the host-dependent checks, it never
/// aborts scoring.
fn extract_hostname(url: &str) -> Option<String> {
  let rest = url.split("://").nth(1)?;
  let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
  // Userinfo ends at the last '@'; the port starts at the first ':'.
  let host = authority.rsplit('@').next().unwrap_or(authority);
  let host = host.split(':').next().unwrap_or(host);
  if host.is_empty() {
    None
  } else {
    Some(host.to_lowercase())
  }
}

/// Scores one URL string for common phishing characteristics.
///
/// The checks run in a fixed order (IP-literal host, length, `@` symbol,
/// subdomain depth, hyphenated host, suspicious keyword) and each adds at
/// most one point. Any input is accepted; malformed strings simply skip
/// the host-dependent checks.
#[must_use]
pub fn analyze(target: &str) -> Analysis {
  let url = normalize(target);
  let hostname = extract_hostname(&url);
  let host = hostname.as_deref();

  let mut findings = Vec::new();

  if host.is_some_and(|h| RE_IPV4.is_match(h)) {
    findings
      .push("URL uses an IP address instead of a domain name.".to_owned());
  }

  if url.chars().count() > MAX_URL_CHARS {
    findings.push("URL is very long (> 75 characters).".to_owned());
  }

  if memchr(b'@', url.as_bytes()).is_some() {
    findings.push(
      "URL contains the '@' symbol, which can be used to trick users."
        .to_owned(),
    );
  }

  if host.is_some_and(|h| h.matches('.').count() > MAX_HOSTNAME_DOTS) {
    findings.push("URL has a high number of subdomains.".to_owned());
  }

  if host.is_some_and(|h| h.contains('-')) {
    findings.push(
      "URL contains a dash '-' in the domain name, often used to imitate legitimate sites."
        .to_owned(),
    );
  }

  let lowered = url.to_lowercase();
  if let Some(keyword) =
    SUSPICIOUS_KEYWORDS.iter().find(|k| lowered.contains(**k))
  {
    findings.push(format!("URL contains a suspicious keyword: '{keyword}'."));
  }

  let score = findings.len();
  Analysis {
    target: target.to_owned(),
    url,
    score,
    findings,
    verdict: Verdict::from_score(score),
  }
}
