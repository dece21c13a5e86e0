//! Edge-list sources.
//!
//! The engine only needs an in-memory `EdgeList` once per rebuild; where it
//! comes from stays behind the `EdgeSource` trait so file layout remains a
//! detail of the embedding application.

use crate::connection::EdgeList;
use crate::error::SourceError;
use std::fs;
use std::path::{Path, PathBuf};

/// Supplies the raw edge list for a cache build.
pub trait EdgeSource {
    /// Loads the full edge list. Called once per rebuild.
    fn load(&self) -> Result<EdgeList, SourceError>;
}

/// Reads the edge list from a JSON document on disk.
///
/// The document holds a `connections` array and an optional `categories`
/// array for standalone categories:
///
/// ```json
/// {
///   "categories": ["ambient"],
///   "connections": [
///     { "categoryA": "rock", "categoryB": "pop", "weight": 8 }
///   ]
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EdgeSource for JsonFileSource {
    fn load(&self) -> Result<EdgeList, SourceError> {
        tracing::debug!(path = %self.path.display(), "reading edge list");
        let contents = fs::read_to_string(&self.path)?;
        let list = serde_json::from_str(&contents)?;
        Ok(list)
    }
}

/// An edge list already held in memory.
///
/// Useful for embedders that fetch the records themselves and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    list: EdgeList,
}

impl StaticSource {
    /// Wraps an in-memory edge list.
    pub fn new(list: EdgeList) -> Self {
        Self { list }
    }
}

impl EdgeSource for StaticSource {
    fn load(&self) -> Result<EdgeList, SourceError> {
        Ok(self.list.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::Connection;
    use std::io::Write;

    #[test]
    fn test_json_file_source_loads_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "connections": [
                    {{ "categoryA": "rock", "categoryB": "pop", "weight": 8 }},
                    {{ "categoryA": "pop", "categoryB": "jazz", "weight": 6 }}
                ]
            }}"#
        )
        .unwrap();

        let source = JsonFileSource::new(file.path());
        let list = source.load().unwrap();

        assert_eq!(list.connections.len(), 2);
        assert_eq!(list.connections[0], Connection::new("rock", "pop", 8.0));
    }

    #[test]
    fn test_json_file_source_missing_file() {
        let source = JsonFileSource::new("/nonexistent/edges.json");
        let err = source.load().unwrap_err();

        assert!(matches!(err, SourceError::Io(_)));
    }

    #[test]
    fn test_json_file_source_malformed_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let source = JsonFileSource::new(file.path());
        let err = source.load().unwrap_err();

        assert!(matches!(err, SourceError::Parse(_)));
    }

    #[test]
    fn test_static_source_returns_list() {
        let list = EdgeList::from_connections(vec![Connection::new("rock", "pop", 8.0)]);
        let source = StaticSource::new(list.clone());

        assert_eq!(source.load().unwrap(), list);
    }
}
