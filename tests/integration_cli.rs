//! Binary integration tests for CLI commands
//!
//! These tests run the actual clarifi binary with an isolated config file so
//! the simulated analysis finishes immediately.

#![expect(clippy::unwrap_used, reason = "integration test assertions")]

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self::with_config(r#"{"analysis_delay_ms": 0}"#)
    }

    fn with_config(json: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), json).unwrap();
        Self { dir }
    }

    fn clarifi(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_clarifi"));
        cmd.env("CLARIFI_CONFIG_PATH", self.dir.path().join("config.json"))
            .env_remove("DEBUG");
        cmd
    }

    fn write(&self, name: &str, contents: &str) -> std::path::PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn analyze_stdin(&self, model: &str, text: &str) -> Output {
        let mut child = self
            .clarifi()
            .args(["analyze", "--model", model])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        child
            .stdin
            .take()
            .unwrap()
            .write_all(text.as_bytes())
            .unwrap();
        child.wait_with_output().unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_cli_help() {
    let output = Fixture::new().clarifi().arg("--help").output().unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("Improve your writing with AI"));
}

#[test]
fn test_cli_version() {
    let output = Fixture::new().clarifi().arg("--version").output().unwrap();
    assert!(output.status.success());
}

#[test]
fn test_cli_invalid_argument_shows_help() {
    let output = Fixture::new().clarifi().arg("--invalid-flag").output().unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("error:"));
    assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn test_cli_invalid_route_rejected() {
    let output = Fixture::new()
        .clarifi()
        .args(["--route", "/feedback", "models"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_models_grouped_by_provider() {
    let output = Fixture::new().clarifi().arg("models").output().unwrap();
    assert!(output.status.success());

    let out = stdout(&output);
    let openai = out.find("OpenAI").unwrap();
    let anthropic = out.find("Anthropic").unwrap();
    assert!(openai < anthropic);
    for id in ["gpt-4", "gpt-3.5-turbo", "claude-3-opus", "claude-3-sonnet"] {
        assert!(out.contains(id), "missing {id}");
    }
    assert!(out.contains("₹15.00"));
    assert!(out.contains("Best for: Creative writing"));
}

#[test]
fn test_models_search() {
    let output = Fixture::new()
        .clarifi()
        .args(["models", "--search", "grammar"])
        .output()
        .unwrap();
    let out = stdout(&output);
    assert!(out.contains("gpt-3.5-turbo"));
    assert!(!out.contains("claude-3-opus"));

    let output = Fixture::new()
        .clarifi()
        .args(["models", "--search", "nothing-like-this"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("No models match"));
}

#[test]
fn test_models_json() {
    let output = Fixture::new()
        .clarifi()
        .args(["models", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let models: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let models = models.as_array().unwrap();
    assert_eq!(models.len(), 4);
    assert_eq!(models[0]["id"], "gpt-4");
    assert_eq!(models[0]["costPer1kTokens"], 15.0);
    assert_eq!(models[0]["performance"]["quality"], 5);
}

#[test]
fn test_models_custom_catalog_flag() {
    let fixture = Fixture::new();
    let catalog = fixture.write(
        "catalog.json",
        r#"[{"id": "local-small", "name": "Local Small", "provider": "Local",
            "costPer1kTokens": 0, "performance": {"speed": 9, "quality": 0}}]"#,
    );
    let output = fixture
        .clarifi()
        .arg("models")
        .arg("--catalog")
        .arg(&catalog)
        .output()
        .unwrap();
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("local-small"));
    assert!(out.contains("speed ★★★★★"));
    assert!(out.contains("quality ★☆☆☆☆"));
    assert!(!out.contains("gpt-4"));
}

#[test]
fn test_bad_catalog_fails() {
    let fixture = Fixture::new();
    let catalog = fixture.write("catalog.json", r#"[{"id": "x"}]"#);
    let output = fixture
        .clarifi()
        .args(["models", "--catalog"])
        .arg(&catalog)
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_analyze_file_prints_session_id() {
    let fixture = Fixture::new();
    let text = fixture.write("essay.txt", "The quick brown fox jumps over the lazy dog.");
    let output = fixture
        .clarifi()
        .args(["analyze", "--model", "claude-3-sonnet", "--file"])
        .arg(&text)
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let session = stdout(&output);
    let session = session.trim();
    assert_eq!(session.len(), 36);
    assert_eq!(session.matches('-').count(), 4);
}

#[test]
fn test_analyze_stdin() {
    let output = Fixture::new().analyze_stdin("gpt-4", "Some words worth reviewing.");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim().len(), 36);
}

#[test]
fn test_analyze_blank_text() {
    let output = Fixture::new().analyze_stdin("gpt-4", "  \n\t ");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Please enter some text to analyze"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_analyze_blank_text_checked_before_model() {
    let fixture = Fixture::new();
    for model in ["", "does-not-exist"] {
        let output = fixture.analyze_stdin(model, "   ");
        assert_eq!(output.status.code(), Some(1), "model `{model}`");
        let err = stderr(&output);
        assert!(err.contains("Please enter some text to analyze"), "{err}");
        assert!(!err.contains("Unknown model"), "{err}");
    }
}

#[test]
fn test_analyze_without_model() {
    let output = Fixture::new().analyze_stdin("", "Real text");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Please select a model for analysis"));
}

#[test]
fn test_analyze_unknown_model() {
    let output = Fixture::new().analyze_stdin("does-not-exist", "Real text");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown model"));
}

#[test]
fn test_analyze_respects_max_length() {
    let fixture = Fixture::with_config(r#"{"analysis_delay_ms": 0, "max_length": 5}"#);
    let output = fixture.analyze_stdin("gpt-4", "123456");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("5 character limit"));

    let output = fixture.analyze_stdin("gpt-4", "12345");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
}

#[test]
fn test_invalid_config_fails() {
    let fixture = Fixture::with_config(r#"{"max_length": 0}"#);
    let output = fixture.clarifi().arg("models").output().unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid config"));
}
