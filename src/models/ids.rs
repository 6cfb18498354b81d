use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a candidate source.
///
/// Upstream records carry ids either as JSON strings or as integers. Both are
/// accepted on input and always emitted as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    /// Creates a new source ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying ID value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<'de> Deserialize<'de> for SourceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        match RawId::deserialize(deserializer) {
            Ok(RawId::Text(s)) => Ok(Self(s)),
            Ok(RawId::Signed(n)) => Ok(Self(n.to_string())),
            Ok(RawId::Unsigned(n)) => Ok(Self(n.to_string())),
            Err(_) => Err(serde::de::Error::custom(
                "source id must be a string or an integer",
            )),
        }
    }
}
