mod amazon_url;
mod author;
mod isbn;
mod language;
mod pages;
mod publisher;
mod title;
mod year;

pub use self::{amazon_url::*, author::*, isbn::*, language::*, pages::*, publisher::*, title::*, year::*};

/// A catalog record. All fields are present on every persisted book,
/// and `isbn` is the immutable row identity.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Book {
    isbn: Isbn,
    amazon_url: AmazonUrl,
    author: BookAuthor,
    language: BookLanguage,
    pages: BookPages,
    publisher: BookPublisher,
    title: BookTitle,
    year: BookYear,
}

impl Book {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        isbn: Isbn,
        amazon_url: AmazonUrl,
        author: BookAuthor,
        language: BookLanguage,
        pages: BookPages,
        publisher: BookPublisher,
        title: BookTitle,
        year: BookYear,
    ) -> Self {
        Self {
            isbn,
            amazon_url,
            author,
            language,
            pages,
            publisher,
            title,
            year,
        }
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn amazon_url(&self) -> &AmazonUrl {
        &self.amazon_url
    }

    pub fn author(&self) -> &BookAuthor {
        &self.author
    }

    pub fn language(&self) -> &BookLanguage {
        &self.language
    }

    pub fn pages(&self) -> &BookPages {
        &self.pages
    }

    pub fn publisher(&self) -> &BookPublisher {
        &self.publisher
    }

    pub fn title(&self) -> &BookTitle {
        &self.title
    }

    pub fn year(&self) -> &BookYear {
        &self.year
    }
}
