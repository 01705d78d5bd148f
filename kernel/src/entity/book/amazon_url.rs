use serde::{Deserialize, Serialize};

/// Stored as a plain string. Syntactic URL checks happen upstream,
/// before a payload ever becomes an entity.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct AmazonUrl(String);

impl AmazonUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}

impl AsRef<str> for AmazonUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<AmazonUrl> for String {
    fn from(value: AmazonUrl) -> Self {
        value.0
    }
}
