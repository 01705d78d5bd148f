use crate::entity::{Book, Isbn};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookQuery<Connection: Send>: Sync + Send + 'static {
    async fn find_by_isbn(
        &self,
        con: &mut Connection,
        isbn: &Isbn,
    ) -> error_stack::Result<Option<Book>, KernelError>;

    /// All records in storage order. The order carries no meaning.
    async fn find_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Book>, KernelError>;
}

pub trait DependOnBookQuery<Connection: Send>: Sync + Send + 'static {
    type BookQuery: BookQuery<Connection>;
    fn book_query(&self) -> &Self::BookQuery;
}
