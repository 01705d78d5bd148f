use crate::entity::{Book, Isbn};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookModifier<Connection: Send>: 'static + Sync + Send {
    /// Inserts a new row. Fails with [`KernelError::Conflict`] when a row
    /// with the same isbn already exists.
    async fn create(
        &self,
        con: &mut Connection,
        book: &Book,
    ) -> error_stack::Result<(), KernelError>;

    /// Overwrites every mutable field of the row matching `book.isbn()`.
    /// The row's isbn itself is never written. Fails with
    /// [`KernelError::NotFound`] when no such row exists.
    async fn update(
        &self,
        con: &mut Connection,
        book: &Book,
    ) -> error_stack::Result<(), KernelError>;

    /// Removes the row matching `isbn`. Fails with
    /// [`KernelError::NotFound`] when absent.
    async fn delete(
        &self,
        con: &mut Connection,
        isbn: &Isbn,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookModifier<Connection: Send>: 'static + Sync + Send {
    type BookModifier: BookModifier<Connection>;
    fn book_modifier(&self) -> &Self::BookModifier;
}
