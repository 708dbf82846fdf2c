use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::errors::{ConfigCheckError, ConfigCheckResult};

/// Read and parse the client configuration
///
/// The file is read in full and closed before parsing starts, so the handle
/// is released whether or not the content is valid JSON.
///
/// # Errors
/// * [`ConfigCheckError::Read`] - the file is missing or unreadable
/// * [`ConfigCheckError::Parse`] - the content is not valid JSON
pub fn load_document(path: &Path) -> ConfigCheckResult<Value> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigCheckError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "read config file");

    serde_json::from_str(&raw).map_err(|source| ConfigCheckError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_document() {
        let file = write_temp(r#"{"mcpServers": {"filesystem": {"args": ["D:/GitFolder"]}}}"#);

        let document = load_document(file.path()).unwrap();
        assert_eq!(
            document,
            json!({"mcpServers": {"filesystem": {"args": ["D:/GitFolder"]}}})
        );
    }

    #[test]
    fn test_load_preserves_key_order() {
        let file = write_temp(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#);

        let document = load_document(file.path()).unwrap();
        let keys: Vec<&str> = document
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let file = write_temp(
            r#"{"mcpServers": {"filesystem": {"args": ["old"]}, "filesystem": {"args": ["new"]}}}"#,
        );

        let document = load_document(file.path()).unwrap();
        assert_eq!(document["mcpServers"]["filesystem"]["args"], json!(["new"]));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, ConfigCheckError::Read { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let file = write_temp(r#"{"mcpServers": {"filesystem": "#);

        let err = load_document(file.path()).unwrap_err();
        assert!(matches!(err, ConfigCheckError::Parse { .. }));
    }
}
