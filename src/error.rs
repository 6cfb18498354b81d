//! Error types for the citation pipeline.

use thiserror::Error;

use crate::fetch::FetchError;

/// Errors raised while turning upstream records into citations.
#[derive(Debug, Error)]
pub enum CitemapError {
    /// The upstream fetch failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A record is missing a required field or has a field of the wrong type.
    #[error("Malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output could not be serialized, or an input file is not JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
