use serde::{Deserialize, Serialize};
use serde_json::Value;

use kernel::prelude::entity::{
    AmazonUrl, Book, BookAuthor, BookLanguage, BookPages, BookPublisher, BookTitle, BookYear, Isbn,
};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i32,
    pub publisher: String,
    pub title: String,
    pub year: i32,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        Self {
            isbn: value.isbn().as_ref().to_owned(),
            amazon_url: value.amazon_url().as_ref().to_owned(),
            author: value.author().as_ref().to_owned(),
            language: value.language().as_ref().to_owned(),
            pages: (*value.pages()).into(),
            publisher: value.publisher().as_ref().to_owned(),
            title: value.title().as_ref().to_owned(),
            year: (*value.year()).into(),
        }
    }
}

impl From<BookDto> for Book {
    fn from(value: BookDto) -> Self {
        Book::new(
            Isbn::new(value.isbn),
            AmazonUrl::new(value.amazon_url),
            BookAuthor::new(value.author),
            BookLanguage::new(value.language),
            BookPages::new(value.pages),
            BookPublisher::new(value.publisher),
            BookTitle::new(value.title),
            BookYear::new(value.year),
        )
    }
}

pub struct CreateBookDto {
    pub payload: Value,
}

pub struct GetBookDto {
    pub isbn: String,
}

pub struct UpdateBookDto {
    pub isbn: String,
    pub payload: Value,
}

pub struct DeleteBookDto {
    pub isbn: String,
}
