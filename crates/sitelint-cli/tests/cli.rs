#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use tempfile::NamedTempFile;

fn sitelint_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sitelint").expect("binary should be built");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A localhost URL nothing is listening on.
fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/")
}

/// Serve `body` once with a 200 and return the URL.
fn serve_once(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://127.0.0.1:{port}/")
}

#[test]
fn missing_url_is_a_usage_error() {
    sitelint_cmd().assert().failure();
}

#[test]
fn invalid_url_exits_2() {
    sitelint_cmd()
        .arg("not a url")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid input"));
}

#[test]
fn non_http_scheme_exits_2() {
    sitelint_cmd().arg("ftp://example.com/").assert().code(2);
}

#[test]
fn list_sources_prints_registry() {
    sitelint_cmd()
        .arg("--list-sources")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("owasp"))
        .stdout(predicate::str::contains("WCAG 2.1"))
        .stdout(predicate::str::contains("css-guidelines"));
}

#[test]
fn unreachable_host_reports_connection_error() {
    let output = sitelint_cmd()
        .arg(closed_port_url())
        .args(["--source", "wcag"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["overallScore"], 0);
    assert_eq!(json["violations"][0]["id"], "connection-error");
    assert_eq!(json["violations"][0]["category"], "Connectivity");
    assert_eq!(json["summary"]["totalRules"], 13);
    assert_eq!(json["summary"]["failedRules"], 1);
}

#[test]
fn fail_under_turns_low_score_into_exit_1() {
    sitelint_cmd()
        .arg(closed_port_url())
        .args(["--fail-under", "50"])
        .assert()
        .code(1);
}

#[test]
fn text_format_renders_summary() {
    sitelint_cmd()
        .arg(closed_port_url())
        .args(["--format", "text", "--sequential"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Score: 0/100"))
        .stdout(predicate::str::contains("connection-error"));
}

#[test]
fn out_writes_report_to_file() {
    let url = serve_once("<!DOCTYPE html><html lang=\"en\"><head><title>Hello from sitelint</title></head><body><h1>Only</h1></body></html>");
    let out = NamedTempFile::new().unwrap();

    sitelint_cmd()
        .arg(&url)
        .args(["--source", "mdn", "--out"])
        .arg(out.path())
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(out.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["siteUrl"], url);
    assert_eq!(json["summary"]["totalRules"], 8);
    assert!(json["contentSha256"].as_str().is_some_and(|h| h.len() == 64));
    let ids: Vec<&str> = json["violations"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v["id"].as_str())
        .collect();
    assert!(!ids.contains(&"html-002"));
}

#[test]
fn malformed_config_is_reported() {
    let mut cfg = NamedTempFile::new().unwrap();
    cfg.write_all(b"[fetch\n").unwrap();
    cfg.flush().unwrap();

    sitelint_cmd()
        .arg("https://example.com/")
        .arg("--config")
        .arg(cfg.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}
