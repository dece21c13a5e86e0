use thiserror::Error;

/// Errors from reading or decoding an edge-list source.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read edge list: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed edge list: {0}")]
    Parse(#[from] serde_json::Error),
}
