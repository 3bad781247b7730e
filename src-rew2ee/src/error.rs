//! Error type for the conversion pipeline

use std::path::PathBuf;

/// Errors raised while converting a filter file
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("cannot read filter file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize preset: {0}")]
    Serialize(#[from] serde_json::Error),
}
