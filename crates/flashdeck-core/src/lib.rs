use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod client;

pub use client::AnalyzerClient;

/// Default analyzer endpoint when no override is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// A key concept extracted from a video: a term and its definition.
///
/// Concepts carry no identity beyond their position in the list returned by
/// the analyzer. Either field may be empty; the UI renders them as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub term: String,
    pub definition: String,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ClientError {
    /// Whether this is a transport-level failure (as opposed to a response
    /// that arrived but failed the schema check).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status(_))
    }
}
