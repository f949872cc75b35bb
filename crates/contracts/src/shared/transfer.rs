//! JSON export/import payloads, independent of the browser download and file APIs.

use super::format::format_json;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_EXPORT_FILENAME: &str = "export.json";

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("failed to serialize export: {0}")]
    Serialize(#[source] serde_json::Error),
    /// Displays the parser message alone; callers add their own prefix.
    #[error("{0}")]
    Parse(#[source] serde_json::Error),
}

/// File content for an export: pretty JSON, 2-space indent.
pub fn export_json<T: Serialize + ?Sized>(value: &T) -> Result<String, TransferError> {
    format_json(value).map_err(TransferError::Serialize)
}

/// Parses imported file content into an untyped JSON value.
pub fn parse_import(text: &str) -> Result<Value, TransferError> {
    serde_json::from_str(text).map_err(TransferError::Parse)
}

/// Blank or missing names fall back to `export.json`.
pub fn export_filename(requested: Option<&str>) -> String {
    match requested.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_EXPORT_FILENAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_export_import_roundtrip() {
        let value = json!({
            "name": "shop",
            "count": 42,
            "ratio": 0.25,
            "active": true,
            "owner": null,
            "tags": ["a", "b", { "nested": [1, 2, 3] }]
        });
        let text = export_json(&value).unwrap();
        assert!(text.contains("\n  \"name\": \"shop\""));
        assert_eq!(parse_import(&text).unwrap(), value);
    }

    #[test]
    fn test_invalid_import_reports_parser_message() {
        let err = parse_import("{ \"a\": ").unwrap_err();
        assert!(matches!(err, TransferError::Parse(_)));
        assert!(err.to_string().contains("EOF"));
        assert!(parse_import("").is_err());
        assert!(parse_import("not json").is_err());
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename(None), "export.json");
        assert_eq!(export_filename(Some("  ")), "export.json");
        assert_eq!(export_filename(Some("databases.json")), "databases.json");
    }
}
