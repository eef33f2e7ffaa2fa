//! Route file loading from disk.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::routing::RouteTable;

/// Shape of a route file: path → method → status code → payload.
pub type RawRoutes = BTreeMap<String, BTreeMap<String, BTreeMap<String, Value>>>;

/// Error type for route file loading. Every variant is fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file does not exist.
    #[error("{} not found", .path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read.
    #[error("invalid {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not JSON of the expected shape.
    #[error("invalid {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a route file and build the route table.
pub fn load_routes(path: &Path) -> Result<RouteTable, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let table = parse_routes(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        routes = table.len(),
        status_codes = table.codes().len() - 1,
        "Route file loaded"
    );
    Ok(table)
}

/// Parse route file content. Entries that fail validation are skipped;
/// only malformed JSON or a wrong nesting shape is an error.
pub fn parse_routes(content: &str) -> Result<RouteTable, serde_json::Error> {
    let raw: RawRoutes = serde_json::from_str(content)?;
    Ok(RouteTable::build(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_routes_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"/books": {{"GET": {{"200": {{"books": []}}}}}}}}"#).unwrap();

        let table = load_routes(file.path()).unwrap();
        assert_eq!(table.paths().collect::<Vec<_>>(), vec!["/books"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mock.json");

        let err = load_routes(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
        assert!(err.to_string().ends_with("mock.json not found"));
    }

    #[test]
    fn test_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = load_routes(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid "));
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        assert!(parse_routes(r#"{"/books": ["GET"]}"#).is_err());
        assert!(parse_routes(r#"{"/books": {"GET": "200"}}"#).is_err());
        assert!(parse_routes(r#"[]"#).is_err());
    }

    #[test]
    fn test_any_payload_shape_is_accepted() {
        let table = parse_routes(
            r#"{"/things": {"GET": {"200": [1, 2, 3], "201": "text", "202": null, "204": 4.5}}}"#,
        )
        .unwrap();
        let get = table.routes()[0].method("GET").unwrap();
        assert_eq!(get.candidates().len(), 4);
    }

    #[test]
    fn test_empty_object_loads_empty_table() {
        let table = parse_routes("{}").unwrap();
        assert!(table.is_empty());
    }
}
