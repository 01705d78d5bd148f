use application::transfer::BookDto;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BookBody {
    isbn: String,
    amazon_url: String,
    author: String,
    language: String,
    pages: i32,
    publisher: String,
    title: String,
    year: i32,
}

impl From<BookDto> for BookBody {
    fn from(value: BookDto) -> Self {
        Self {
            isbn: value.isbn,
            amazon_url: value.amazon_url,
            author: value.author,
            language: value.language,
            pages: value.pages,
            publisher: value.publisher,
            title: value.title,
            year: value.year,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookResponse {
    book: BookBody,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        Self {
            book: BookBody::from(value),
        }
    }
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedBookResponse {
    book: BookBody,
}

impl From<BookDto> for CreatedBookResponse {
    fn from(value: BookDto) -> Self {
        Self {
            book: BookBody::from(value),
        }
    }
}

impl IntoResponse for CreatedBookResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BookListResponse {
    books: Vec<BookBody>,
}

impl From<Vec<BookDto>> for BookListResponse {
    fn from(value: Vec<BookDto>) -> Self {
        Self {
            books: value.into_iter().map(BookBody::from).collect(),
        }
    }
}

impl IntoResponse for BookListResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedBookResponse {
    message: &'static str,
}

impl DeletedBookResponse {
    pub fn new() -> Self {
        Self {
            message: "Book deleted",
        }
    }
}

impl IntoResponse for DeletedBookResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
