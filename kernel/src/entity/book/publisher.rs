use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BookPublisher(String);

impl BookPublisher {
    pub fn new(publisher: impl Into<String>) -> Self {
        Self(publisher.into())
    }
}

impl AsRef<str> for BookPublisher {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<BookPublisher> for String {
    fn from(value: BookPublisher) -> Self {
        value.0
    }
}
