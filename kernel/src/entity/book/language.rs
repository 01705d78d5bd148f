use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BookLanguage(String);

impl BookLanguage {
    pub fn new(language: impl Into<String>) -> Self {
        Self(language.into())
    }
}

impl AsRef<str> for BookLanguage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<BookLanguage> for String {
    fn from(value: BookLanguage) -> Self {
        value.0
    }
}
