use assert_cmd::Command;
use predicates::str::contains;
use quote_common::test_support::{StubServer, unreachable_endpoint};

fn cmd(endpoint: &str) -> Command {
    let mut cmd = Command::cargo_bin("quote_client").unwrap();
    cmd.args(["--endpoint", endpoint, "--no-proxy", "--timeout-secs", "5"]);
    cmd
}

#[test]
fn once_shows_quote_content() {
    let server = StubServer::ok(r#"{"content":"Less is more.","author":"Ludwig Mies van der Rohe"}"#)
        .unwrap();

    cmd(&server.url())
        .arg("--once")
        .assert()
        .success()
        .stdout(contains("  Less is more.\n"))
        .stdout(contains("~ Ludwig Mies van der Rohe"));
    assert_eq!(server.hits(), 1);
}

#[test]
fn once_shows_decoding_error_text() {
    let server = StubServer::ok(r#"{"quote":"wrong shape"}"#).unwrap();

    cmd(&server.url())
        .arg("--once")
        .assert()
        .failure()
        .stdout(contains("Could not read the quote"));
}

#[test]
fn once_shows_transport_error_text() {
    let endpoint = unreachable_endpoint().unwrap();

    cmd(&endpoint)
        .arg("--once")
        .assert()
        .failure()
        .stdout(contains("Could not reach the quote service"));
}

#[test]
fn rejects_invalid_endpoint() {
    cmd("ftp://example.com/random")
        .arg("--once")
        .assert()
        .failure()
        .stderr(contains("Endpoint"));
}

#[test]
fn interactive_fetches_once_on_startup_and_exits_on_eof() {
    let server = StubServer::ok(r#"{"content":"Start where you are.","author":"Arthur Ashe"}"#)
        .unwrap();

    cmd(&server.url())
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Loading..."))
        .stdout(contains("  Start where you are.\n"));
    assert_eq!(server.hits(), 1);
}

#[test]
fn every_refresh_line_fetches_once() {
    let server = StubServer::ok(r#"{"content":"Again and again.","author":"Unknown"}"#).unwrap();

    cmd(&server.url())
        .write_stdin("r\n\nrefresh\n")
        .assert()
        .success()
        .stdout(contains("  Again and again.\n"));
    // One fetch on startup plus one per refresh line.
    assert_eq!(server.hits(), 4);
}

#[test]
fn unknown_lines_do_not_fetch() {
    let server = StubServer::ok(r#"{"content":"Just once.","author":"Unknown"}"#).unwrap();

    cmd(&server.url())
        .write_stdin("next\n")
        .assert()
        .success()
        .stderr(contains("Unknown command"));
    assert_eq!(server.hits(), 1);
}
