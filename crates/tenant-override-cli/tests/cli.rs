/*
 * cli.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! End-to-end tests that run the built binary.

use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tenant-override"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute command")
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("Expected JSON on stdout")
}

const BASE: &str = r##"{"theme":{"colors":{"primary":"#000000"}},"layout":{"variant":"boxed"}}"##;

const CUSTOMIZATION: &str = r##"
tenantId: acme
tenantName: Acme Corp
baseTemplate: storefront
overrides:
  theme.colors.primary: "#ff5722"
  theme.colors.secondary: "#ff9800"
"##;

#[test]
fn test_apply_prints_customized_tree() {
    let dir = TempDir::new().unwrap();
    let base = write(&dir, "base.json", BASE);
    let customization = write(&dir, "acme.yaml", CUSTOMIZATION);

    let output = run(&[Path::new("apply"), &base, &customization, Path::new("--default-schema")]);

    assert!(output.status.success(), "Expected command to succeed");
    assert_eq!(
        stdout_json(&output),
        json!({
            "theme": { "colors": { "primary": "#ff5722", "secondary": "#ff9800" } },
            "layout": { "variant": "boxed" }
        })
    );
}

#[test]
fn test_apply_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let base = write(&dir, "base.json", BASE);
    let customization = write(&dir, "acme.yaml", CUSTOMIZATION);
    let out = dir.path().join("out.json");

    let output = run(&[Path::new("apply"), &base, &customization, Path::new("-o"), &out]);

    assert!(output.status.success(), "Expected command to succeed");
    assert!(output.stdout.is_empty());
    let written: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written["theme"]["colors"]["secondary"], json!("#ff9800"));
}

#[test]
fn test_strict_apply_with_closed_schema_fails() {
    let dir = TempDir::new().unwrap();
    let base = write(&dir, "base.json", BASE);
    let customization = write(
        &dir,
        "acme.json",
        r#"{"tenantId":"acme","tenantName":"Acme","baseTemplate":"storefront","overrides":{"bogus.path":"x"}}"#,
    );
    let schema = write(&dir, "schema.yaml", "allowedPaths:\n  theme.colors.*:\n    type: string\n");

    let output = run(&[
        Path::new("apply"),
        &base,
        &customization,
        Path::new("--schema"),
        &schema,
        Path::new("--strict"),
    ]);

    assert!(!output.status.success(), "Expected command to fail");
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed validation"), "Unexpected stderr: {}", stderr);
}

#[test]
fn test_validate_reports_errors() {
    let dir = TempDir::new().unwrap();
    let customization = write(
        &dir,
        "acme.yaml",
        "tenantId: acme\ntenantName: Acme\nbaseTemplate: storefront\noverrides:\n  layout.variant: grid\n",
    );

    let output = run(&[Path::new("validate"), &customization]);

    assert!(!output.status.success(), "Expected invalid overrides to fail");
    let result = stdout_json(&output);
    assert_eq!(result["valid"], json!(false));
    assert_eq!(result["errors"][0]["path"], json!("layout.variant"));
    assert_eq!(result["errors"][0]["code"], json!("TO-1-12"));
}

#[test]
fn test_validate_accepts_valid_overrides() {
    let dir = TempDir::new().unwrap();
    let customization = write(&dir, "acme.yaml", CUSTOMIZATION);

    let output = run(&[Path::new("validate"), &customization]);

    assert!(output.status.success(), "Expected command to succeed");
    assert_eq!(stdout_json(&output), json!({ "valid": true, "errors": [] }));
}

#[test]
fn test_validate_uses_schema_file() {
    let dir = TempDir::new().unwrap();
    let customization = write(&dir, "acme.yaml", CUSTOMIZATION);
    let schema = write(
        &dir,
        "schema.yaml",
        "allowedPaths:\n  theme.colors.primary:\n    type: string\nallowUnknownPaths: false\n",
    );

    let output = run(&[Path::new("validate"), &customization, Path::new("--schema"), &schema]);

    assert!(!output.status.success(), "Expected the closed schema to reject secondary");
    let result = stdout_json(&output);
    assert_eq!(result["errors"].as_array().unwrap().len(), 1);
    assert_eq!(result["errors"][0]["path"], json!("theme.colors.secondary"));
    assert_eq!(result["errors"][0]["code"], json!("TO-1-18"));
}

#[test]
fn test_validate_has_no_default_schema_flag() {
    let dir = TempDir::new().unwrap();
    let customization = write(&dir, "acme.yaml", CUSTOMIZATION);

    let output = run(&[Path::new("validate"), &customization, Path::new("--default-schema")]);

    assert!(!output.status.success(), "Expected clap to reject the flag");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_diff_prints_overrides() {
    let dir = TempDir::new().unwrap();
    let original = write(&dir, "original.json", BASE);
    let customized = write(
        &dir,
        "customized.json",
        r##"{"theme":{"colors":{"primary":"#ff5722"}}}"##,
    );

    let output = run(&[Path::new("diff"), &original, &customized]);

    assert!(output.status.success(), "Expected command to succeed");
    assert_eq!(
        stdout_json(&output),
        json!({ "theme.colors.primary": "#ff5722", "layout": null })
    );
}

#[test]
fn test_paths_with_pattern() {
    let dir = TempDir::new().unwrap();
    let base = write(&dir, "base.json", BASE);

    let output = run(&[Path::new("paths"), &base, Path::new("--pattern"), Path::new("theme.**")]);

    assert!(output.status.success(), "Expected command to succeed");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "theme.colors.primary\n");
}
