use anyhow::{Context, Result};
use serde_json::Value;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where a payload document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` means stdin, anything else is a file path
    pub fn from_path(path: &Path) -> Self {
        if path == Path::new("-") {
            InputSource::Stdin
        } else {
            InputSource::File(path.to_path_buf())
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read and decode one JSON document
pub fn read_document(source: &InputSource) -> Result<Value> {
    let text = match source {
        InputSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read payload from stdin")?;
            buf
        }
        InputSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read payload file {}", path.display()))?,
    };
    parse_document(&text).with_context(|| format!("Invalid JSON in {source}"))
}

pub fn parse_document(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Pick the payloads out of a document.
///
/// The optional JSON pointer selects a sub-value first. An array yields
/// each of its elements, anything else is a single payload.
pub fn select_payloads(document: Value, pointer: Option<&str>) -> Result<Vec<Value>> {
    let selected = match pointer {
        Some(pointer) => document
            .pointer(pointer)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("JSON pointer {pointer} matched nothing"))?,
        None => document,
    };

    Ok(match selected {
        Value::Array(items) => items,
        other => vec![other],
    })
}
