use serde::{Deserialize, Deserializer, Serialize};

use super::SourceId;

/// A candidate citation: an identified snippet of context with an optional link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Identifier of the source.
    pub id: SourceId,
    /// Descriptive text whose whitespace-delimited tokens drive matching.
    pub context: String,
    /// Link to the source. Absent or `null` links are read as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
}

impl Source {
    /// Creates a new source.
    pub fn new(id: impl Into<SourceId>, context: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            context: context.into(),
            link: link.into(),
        }
    }

    /// Returns true if the source carries a non-empty link.
    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_source() {
        let json = r#"{"id": "71", "context": "Order online", "link": "https://orders.brikoven.com"}"#;
        let source: Source = serde_json::from_str(json).unwrap();

        assert_eq!(source.id.as_str(), "71");
        assert_eq!(source.context, "Order online");
        assert!(source.has_link());
    }

    #[test]
    fn missing_link_reads_as_empty() {
        let source: Source = serde_json::from_str(r#"{"id": "1", "context": "x"}"#).unwrap();
        assert_eq!(source.link, "");
        assert!(!source.has_link());
    }

    #[test]
    fn null_link_reads_as_empty() {
        let json = r#"{"id": "1", "context": "x", "link": null}"#;
        let source: Source = serde_json::from_str(json).unwrap();
        assert!(!source.has_link());
    }

    #[test]
    fn missing_context_is_rejected() {
        let result: Result<Source, _> = serde_json::from_str(r#"{"id": "1", "link": ""}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("missing field `context`"));
    }
}
