use serde::{Deserialize, Serialize};

use super::{Citation, Source};

/// One upstream record: a response text and the sources it may cite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseItem {
    pub response: String,
    pub sources: Vec<Source>,
}

impl ResponseItem {
    /// Creates a new response item.
    pub fn new(response: impl Into<String>, sources: Vec<Source>) -> Self {
        Self {
            response: response.into(),
            sources,
        }
    }
}

/// A response paired with the citations found for it.
///
/// This is the unit written to the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedItem {
    pub response: String,
    pub citations: Vec<Citation>,
}
