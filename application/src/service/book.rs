use error_stack::Report;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{BookDataStore, DependOnBookDataStore};
use kernel::interface::event::{BookEvent, BookEventDispatcher, DependOnBookEventDispatcher};
use kernel::prelude::entity::{Book, BookId, BookRecord, BorrowedAt, Borrower};
use kernel::KernelError;

use crate::service::BookIdGenerator;

/// Use-case surface of the catalog. All record changes funnel through
/// [`BookCollection::update_book`]; there is no concurrency control between
/// load and persist, so two concurrent updates of the same record resolve
/// last-write-wins.
#[async_trait::async_trait]
pub trait BookCollection:
    'static
    + Sync
    + Send
    + DependOnBookDataStore
    + DependOnClock
    + DependOnBookEventDispatcher
    + BookIdGenerator
{
    async fn get_all_books(&self) -> error_stack::Result<Vec<BookRecord>, KernelError> {
        self.book_data_store().find_all().await
    }

    async fn get_book(&self, id: &BookId) -> error_stack::Result<BookRecord, KernelError> {
        self.book_data_store().find_by_id(id).await?.ok_or_else(|| {
            Report::new(KernelError::NotFound)
                .attach_printable(format!("The book with id {id} does not exist"))
        })
    }

    async fn add_book(&self, book: Book) -> error_stack::Result<BookRecord, KernelError> {
        let id = self.generate_book_id().await?;
        let record = BookRecord::new(id, book);
        let record = self.book_data_store().create_or_update(record).await?;
        self.book_event_dispatcher().dispatch(BookEvent::Added {
            id: record.id().clone(),
            on: self.clock().now(),
        });
        Ok(record)
    }

    /// Loads the record, applies the pure `mutation` and persists the
    /// result. Domain failures raised by the mutation surface unchanged.
    async fn update_book<M>(
        &self,
        id: &BookId,
        mutation: M,
    ) -> error_stack::Result<BookRecord, KernelError>
    where
        M: FnOnce(BookRecord) -> error_stack::Result<BookRecord, KernelError> + Send,
    {
        let record = self.get_book(id).await?;
        let record = mutation(record)?;
        self.book_data_store().create_or_update(record).await
    }

    async fn borrow_book(
        &self,
        id: &BookId,
        by: Borrower,
    ) -> error_stack::Result<BookRecord, KernelError> {
        let on = self.clock().now();
        let borrower = by.clone();
        let record = self
            .update_book(id, move |record| {
                record.borrow(borrower, BorrowedAt::new(on))
            })
            .await?;
        self.book_event_dispatcher().dispatch(BookEvent::Borrowed {
            id: record.id().clone(),
            by,
            on,
        });
        Ok(record)
    }

    async fn return_book(&self, id: &BookId) -> error_stack::Result<BookRecord, KernelError> {
        let record = self.update_book(id, |record| record.give_back()).await?;
        self.book_event_dispatcher().dispatch(BookEvent::Returned {
            id: record.id().clone(),
            on: self.clock().now(),
        });
        Ok(record)
    }

    async fn remove_book(&self, id: &BookId) -> error_stack::Result<(), KernelError> {
        let record = self.get_book(id).await?;
        self.book_data_store().delete(&record).await?;
        self.book_event_dispatcher().dispatch(BookEvent::Removed {
            id: record.id().clone(),
            on: self.clock().now(),
        });
        Ok(())
    }
}

impl<T> BookCollection for T where
    T: DependOnBookDataStore + DependOnClock + DependOnBookEventDispatcher
{
}
