use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

fn cmd() -> Command {
  Command::cargo_bin("lure").unwrap()
}

#[test]
fn single_shot_clean_url() {
  cmd()
    .arg("www.google.com")
    .assert()
    .success()
    .stdout(contains("--- Analysis Report ---"))
    .stdout(contains("No immediate red flags found."))
    .stdout(contains("Final Phishing Score: 0"))
    .stdout(contains("Verdict: Likely Legitimate"));
}

#[test]
fn single_shot_suspicious_url() {
  cmd()
    .arg("192.168.1.1/login")
    .assert()
    .success()
    .stdout(contains("[1] URL uses an IP address instead of a domain name."))
    .stdout(contains("[2] URL contains a suspicious keyword: 'login'."))
    .stdout(contains("Final Phishing Score: 2"))
    .stdout(contains("Verdict: Potentially Suspicious"));
}

#[test]
fn single_shot_json_output() {
  cmd()
    .args(["192.168.1.1/login", "--json"])
    .assert()
    .success()
    .stdout(contains("\"score\": 2"))
    .stdout(contains("\"verdict\": \"Potentially Suspicious\""))
    .stdout(contains("\"url\": \"http://192.168.1.1/login\""));
}

#[test]
fn interactive_exit_word_skips_scoring() {
  cmd()
    .write_stdin("exit\n")
    .assert()
    .success()
    .stdout(contains("--- Basic URL Phishing Detector ---"))
    .stdout(contains("--- Analysis Report ---").not());
}

#[test]
fn interactive_quit_word_is_case_insensitive() {
  cmd()
    .write_stdin("  QUIT  \n")
    .assert()
    .success()
    .stdout(contains("--- Analysis Report ---").not());
}

#[test]
fn interactive_scores_then_exits() {
  cmd()
    .write_stdin("192.168.1.1/login\nquit\n")
    .assert()
    .success()
    .stdout(contains("--- Analysis Report ---"))
    .stdout(contains("Final Phishing Score: 2"));
}

#[test]
fn interactive_end_of_input_exits_cleanly() {
  cmd()
    .write_stdin("")
    .assert()
    .success()
    .stdout(contains("Exiting."));
}
