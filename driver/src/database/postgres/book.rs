use error_stack::Report;
use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, Postgres};

use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{
    AmazonUrl, Book, BookAuthor, BookLanguage, BookPages, BookPublisher, BookTitle, BookYear, Isbn,
};
use kernel::KernelError;

use crate::database::postgres::{ConvertError, PostgresDatabase};

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl BookQuery<PoolConnection<Postgres>> for PostgresBookRepository {
    async fn find_by_isbn(
        &self,
        con: &mut PoolConnection<Postgres>,
        isbn: &Isbn,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_by_isbn(con, isbn).await
    }

    async fn find_all(
        &self,
        con: &mut PoolConnection<Postgres>,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_all(con).await
    }
}

#[async_trait::async_trait]
impl BookModifier<PoolConnection<Postgres>> for PostgresBookRepository {
    async fn create(
        &self,
        con: &mut PoolConnection<Postgres>,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::create(con, book).await
    }

    async fn update(
        &self,
        con: &mut PoolConnection<Postgres>,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::update(con, book).await
    }

    async fn delete(
        &self,
        con: &mut PoolConnection<Postgres>,
        isbn: &Isbn,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::delete(con, isbn).await
    }
}

impl DependOnBookQuery<PoolConnection<Postgres>> for PostgresDatabase {
    type BookQuery = PostgresBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &PostgresBookRepository
    }
}

impl DependOnBookModifier<PoolConnection<Postgres>> for PostgresDatabase {
    type BookModifier = PostgresBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &PostgresBookRepository
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    isbn: String,
    amazon_url: String,
    author: String,
    language: String,
    pages: i32,
    publisher: String,
    title: String,
    year: i32,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
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

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    async fn find_by_isbn(
        con: &mut PgConnection,
        isbn: &Isbn,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT isbn, amazon_url, author, language, pages, publisher, title, year
            FROM books
            WHERE isbn = $1
            "#,
        )
        .bind(isbn.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        let found = row.map(Book::from);
        Ok(found)
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Book>, KernelError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT isbn, amazon_url, author, language, pages, publisher, title, year
            FROM books
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn create(con: &mut PgConnection, book: &Book) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO books (isbn, amazon_url, author, language, pages, publisher, title, year)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(book.isbn().as_ref())
        .bind(book.amazon_url().as_ref())
        .bind(book.author().as_ref())
        .bind(book.language().as_ref())
        .bind(book.pages().as_ref())
        .bind(book.publisher().as_ref())
        .bind(book.title().as_ref())
        .bind(book.year().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, book: &Book) -> error_stack::Result<(), KernelError> {
        // The SET clause never touches isbn: the row identity is immutable.
        // language=postgresql
        let result = sqlx::query(
            r#"
            UPDATE books
            SET amazon_url = $2, author = $3, language = $4, pages = $5, publisher = $6, title = $7, year = $8
            WHERE isbn = $1
            "#,
        )
        .bind(book.isbn().as_ref())
        .bind(book.amazon_url().as_ref())
        .bind(book.author().as_ref())
        .bind(book.language().as_ref())
        .bind(book.pages().as_ref())
        .bind(book.publisher().as_ref())
        .bind(book.title().as_ref())
        .bind(book.year().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(Report::new(KernelError::NotFound));
        }
        Ok(())
    }

    async fn delete(con: &mut PgConnection, isbn: &Isbn) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        let result = sqlx::query(
            r#"
            DELETE FROM books
            WHERE isbn = $1
            "#,
        )
        .bind(isbn.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(Report::new(KernelError::NotFound));
        }
        Ok(())
    }
}
