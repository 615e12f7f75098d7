/*
 * input.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Loading JSON and YAML input files.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Input file syntax, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// `.yaml` and `.yml` are YAML; anything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                InputFormat::Yaml
            }
            _ => InputFormat::Json,
        }
    }
}

/// Parse `content` in the given format.
pub fn parse<T: DeserializeOwned>(content: &str, format: InputFormat) -> Result<T> {
    match format {
        InputFormat::Json => serde_json::from_str(content).context("Invalid JSON"),
        InputFormat::Yaml => serde_yaml::from_str(content).context("Invalid YAML"),
    }
}

/// Read and parse a file, picking the format from its extension.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let format = InputFormat::from_path(path);
    tracing::debug!(path = %path.display(), ?format, "Loading input");
    parse(&content, format).with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("a.yaml")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("a.YML")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("a.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("noext")), InputFormat::Json);
    }

    #[test]
    fn test_load_yaml_and_json() {
        let temp = TempDir::new().unwrap();
        let yaml = temp.path().join("base.yml");
        let json_file = temp.path().join("base.json");
        fs::write(&yaml, "theme:\n  colors:\n    primary: '#000000'\n").unwrap();
        fs::write(&json_file, r##"{"theme":{"colors":{"primary":"#000000"}}}"##).unwrap();

        let from_yaml: Value = load(&yaml).unwrap();
        let from_json: Value = load(&json_file).unwrap();
        assert_eq!(from_yaml, from_json);
        assert_eq!(from_yaml, json!({ "theme": { "colors": { "primary": "#000000" } } }));
    }

    #[test]
    fn test_missing_file_names_path() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.json");
        let err = load::<Value>(&missing).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_parse_error_names_path() {
        let temp = TempDir::new().unwrap();
        let broken = temp.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        let err = load::<Value>(&broken).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid JSON"));
    }
}
