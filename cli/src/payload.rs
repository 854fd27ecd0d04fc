//! Payload loading utilities.
//!
//! A payload file is either bare Base64 text, possibly wrapped over several
//! lines, or a JSON response document holding the Base64 text in a field.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// Error type for payload loading.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("failed to read payload: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse JSON: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("payload is not valid UTF-8")]
    NotUtf8,
    #[error("field '{0}' not found in JSON document")]
    MissingField(String),
    #[error("field '{0}' is not a string")]
    NotAString(String),
}

/// Loads a payload from `path`, or from stdin when `path` is `-`.
pub fn load_payload(path: impl AsRef<Path>, json_field: &str) -> Result<String, PayloadError> {
    let path = path.as_ref();
    let data = if path == Path::new("-") {
        let mut data = Vec::new();
        io::stdin().read_to_end(&mut data)?;
        data
    } else {
        fs::read(path)?
    };
    parse_payload(&data, json_field)
}

/// Extracts the Base64 text from raw file contents.
///
/// Documents starting with `{` are parsed as JSON and the payload is taken
/// from the dotted `json_field` path; numeric segments index into arrays.
/// ASCII whitespace is removed from the result so line-wrapped text decodes.
pub fn parse_payload(data: &[u8], json_field: &str) -> Result<String, PayloadError> {
    let text = std::str::from_utf8(data).map_err(|_| PayloadError::NotUtf8)?;
    let trimmed = text.trim_start();

    let raw = if trimmed.starts_with('{') {
        let doc: Value = serde_json::from_str(trimmed)?;
        let field = lookup(&doc, json_field)
            .ok_or_else(|| PayloadError::MissingField(json_field.to_string()))?;
        field
            .as_str()
            .ok_or_else(|| PayloadError::NotAString(json_field.to_string()))?
            .to_string()
    } else {
        text.to_string()
    };

    Ok(raw.chars().filter(|c| !c.is_ascii_whitespace()).collect())
}

fn lookup<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(doc, |value, segment| match value {
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => value.get(segment),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_bare_text() {
        let payload = parse_payload(b"AID/fw==\n", "audio").unwrap();
        assert_eq!(payload, "AID/fw==");
    }

    #[test]
    fn test_parse_wrapped_text() {
        let payload = parse_payload(b"AAAA\r\nQADA\n/38=\n", "audio").unwrap();
        assert_eq!(payload, "AAAAQADA/38=");
    }

    #[test]
    fn test_parse_json_field() {
        let doc = br#"{"audio": "AID/fw==", "format": "pcm"}"#;
        assert_eq!(parse_payload(doc, "audio").unwrap(), "AID/fw==");
    }

    #[test]
    fn test_parse_nested_json_field() {
        let doc = br#"{"candidates": [{"content": {"parts": [{"inlineData": {"data": "AID/fw=="}}]}}]}"#;
        let payload = parse_payload(doc, "candidates.0.content.parts.0.inlineData.data").unwrap();
        assert_eq!(payload, "AID/fw==");
    }

    #[test]
    fn test_parse_json_missing_field() {
        let err = parse_payload(br#"{"data": "x"}"#, "audio").unwrap_err();
        assert!(matches!(err, PayloadError::MissingField(f) if f == "audio"));
    }

    #[test]
    fn test_parse_json_not_a_string() {
        let err = parse_payload(br#"{"audio": 42}"#, "audio").unwrap_err();
        assert!(matches!(err, PayloadError::NotAString(_)));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_payload(b"{ not json", "audio").unwrap_err();
        assert!(matches!(err, PayloadError::ParseJson(_)));
    }

    #[test]
    fn test_parse_not_utf8() {
        let err = parse_payload(&[0xff, 0xfe], "audio").unwrap_err();
        assert!(matches!(err, PayloadError::NotUtf8));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        writeln!(file, r#"{{"data": {{"audio": "AAAAQADA/38="}}}}"#).unwrap();

        let payload = load_payload(file.path(), "data.audio").unwrap();
        assert_eq!(payload, "AAAAQADA/38=");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_payload("/nonexistent/payload.b64", "audio").unwrap_err();
        assert!(matches!(err, PayloadError::Read(_)));
    }
}
