use error_stack::Report;

use kernel::interface::database::{BookDataStore, DependOnBookDataStore};
use kernel::prelude::entity::BookId;
use kernel::KernelError;

// With 122 random bits a collision re-draw is already freakish; hitting the
// bound means the store answers `exists` wrongly.
const MAX_GENERATION_ATTEMPTS: usize = 16;

/// Produces identifiers that did not exist in the data store at the moment
/// of the check. Uniqueness can still race with a concurrent insert; the
/// store's upsert semantics make that a last-write-wins overwrite.
#[async_trait::async_trait]
pub trait BookIdGenerator: 'static + Sync + Send + DependOnBookDataStore {
    async fn generate_book_id(&self) -> error_stack::Result<BookId, KernelError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let id = BookId::generate();
            if !self.book_data_store().exists_by_id(&id).await? {
                return Ok(id);
            }
        }
        Err(Report::new(KernelError::Internal)
            .attach_printable("Could not draw an unused book id"))
    }
}

impl<T> BookIdGenerator for T where T: DependOnBookDataStore {}
