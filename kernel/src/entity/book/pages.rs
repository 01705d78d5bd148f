use serde::{Deserialize, Serialize};

/// Whole page count, never negative once validated.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct BookPages(i32);

impl BookPages {
    pub fn new(pages: impl Into<i32>) -> Self {
        Self(pages.into())
    }
}

impl AsRef<i32> for BookPages {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}

impl From<BookPages> for i32 {
    fn from(value: BookPages) -> Self {
        value.0
    }
}
