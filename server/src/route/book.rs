use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use application::service::{
    CreateBookService, DeleteBookService, GetAllBooksService, GetBookService, UpdateBookService,
};
use application::transfer::{CreateBookDto, DeleteBookDto, GetBookDto, UpdateBookDto};

use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::book::response::{
    BookListResponse, BookResponse, CreatedBookResponse, DeletedBookResponse,
};

mod response;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(|State(module): State<AppModule>| async move {
                module
                    .pgpool()
                    .get_all_books()
                    .await
                    .map(BookListResponse::from)
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>, Json(payload): Json<Value>| async move {
                    module
                        .pgpool()
                        .create_book(CreateBookDto { payload })
                        .await
                        .map(CreatedBookResponse::from)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/books/:isbn",
            get(
                |State(module): State<AppModule>, Path(isbn): Path<String>| async move {
                    module
                        .pgpool()
                        .get_book(GetBookDto { isbn })
                        .await
                        .map(BookResponse::from)
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |State(module): State<AppModule>,
                 Path(isbn): Path<String>,
                 Json(payload): Json<Value>| async move {
                    module
                        .pgpool()
                        .update_book(UpdateBookDto { isbn, payload })
                        .await
                        .map(BookResponse::from)
                        .map_err(ErrorStatus::missing_as_bad_request)
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(isbn): Path<String>| async move {
                    module
                        .pgpool()
                        .delete_book(DeleteBookDto { isbn })
                        .await
                        .map(|()| DeletedBookResponse::new())
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
