use serde::{Deserialize, Serialize};

use super::{Source, SourceId};

/// A source confirmed relevant to a response, reduced to its id and link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub id: SourceId,
    pub link: String,
}

impl Citation {
    /// Creates a new citation.
    pub fn new(id: impl Into<SourceId>, link: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            link: link.into(),
        }
    }
}

impl From<&Source> for Citation {
    fn from(source: &Source) -> Self {
        Self {
            id: source.id.clone(),
            link: source.link.clone(),
        }
    }
}
