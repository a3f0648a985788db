//! JSON file persistence
//!
//! Reads are lenient: a missing, unreadable or corrupt file is reported as
//! `None` so callers can fall back to defaults. Writes are strict and fully
//! overwrite the target.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Indent used for pretty-printed files
const INDENT: &[u8] = b"    ";

/// Load and parse a JSON file, or `None` if it is absent or malformed
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("{} not found", path.display());
            return None;
        }
        Err(e) => {
            log::warn!("Could not read {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring malformed {}: {}", path.display(), e);
            None
        }
    }
}

/// Pretty-print `value` with four-space indent
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).context("failed to serialize JSON")?;
    String::from_utf8(buf).context("serialized JSON was not UTF-8")
}

/// Overwrite `path` with pretty-printed JSON
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = to_pretty_json(value)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_json_uses_four_spaces() {
        let json = to_pretty_json(&vec![("Player", 42)]).unwrap();
        assert_eq!(json, "[\n    [\n        \"Player\",\n        42\n    ]\n]");
    }

    #[test]
    fn test_missing_file_is_none() {
        let path = Path::new("definitely/not/here.json");
        assert!(read_json::<serde_json::Value>(path).is_none());
    }
}
