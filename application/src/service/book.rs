use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{Book, Isbn};
use kernel::KernelError;

use crate::schema::parse_book;
use crate::transfer::{BookDto, CreateBookDto, DeleteBookDto, GetBookDto, UpdateBookDto};

#[async_trait::async_trait]
pub trait CreateBookService<Connection: 'static + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
    /// Validates the payload against the full book schema, then inserts.
    /// The store is never reached with a malformed payload.
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let book = Book::from(parse_book(&dto.payload)?);

        let mut connection = self.database_connection().acquire().await?;
        self.book_modifier().create(&mut connection, &book).await?;

        Ok(BookDto::from(book))
    }
}

impl<Connection: 'static + Send, T> CreateBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait GetAllBooksService<Connection: 'static + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
    async fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;
        let books = self.book_query().find_all(&mut connection).await?;

        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<Connection: 'static + Send, T> GetAllBooksService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait GetBookService<Connection: 'static + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        let isbn = Isbn::new(dto.isbn);
        let book = self
            .book_query()
            .find_by_isbn(&mut connection, &isbn)
            .await?;

        book.map(BookDto::from)
            .ok_or_else(|| Report::new(KernelError::NotFound))
    }
}

impl<Connection: 'static + Send, T> GetBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdateBookService<Connection: 'static + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
    /// Full replace. The payload must satisfy the whole schema; the row
    /// identity always comes from `dto.isbn`, never from the payload.
    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let parsed = parse_book(&dto.payload)?;
        let book = Book::from(BookDto {
            isbn: dto.isbn,
            ..parsed
        });

        let mut connection = self.database_connection().acquire().await?;
        self.book_modifier().update(&mut connection, &book).await?;

        Ok(BookDto::from(book))
    }
}

impl<Connection: 'static + Send, T> UpdateBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait DeleteBookService<Connection: 'static + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        let isbn = Isbn::new(dto.isbn);
        self.book_modifier().delete(&mut connection, &isbn).await?;

        Ok(())
    }
}

impl<Connection: 'static + Send, T> DeleteBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
}
