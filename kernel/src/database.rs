use crate::entity::{BookId, BookRecord};
use crate::KernelError;

/// Durable home of every [`BookRecord`]. The store is the single source of
/// truth after each write; its atomic single-record upsert is the only
/// consistency guarantee the kernel relies on.
#[async_trait::async_trait]
pub trait BookDataStore: 'static + Sync + Send {
    async fn find_all(&self) -> error_stack::Result<Vec<BookRecord>, KernelError>;
    async fn find_by_id(
        &self,
        id: &BookId,
    ) -> error_stack::Result<Option<BookRecord>, KernelError>;
    async fn exists_by_id(&self, id: &BookId) -> error_stack::Result<bool, KernelError>;
    /// Upsert by id, returning the persisted value.
    async fn create_or_update(
        &self,
        record: BookRecord,
    ) -> error_stack::Result<BookRecord, KernelError>;
    /// No-op if the record is absent.
    async fn delete(&self, record: &BookRecord) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookDataStore: 'static + Sync + Send {
    type BookDataStore: BookDataStore;
    fn book_data_store(&self) -> &Self::BookDataStore;
}
