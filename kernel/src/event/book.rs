use time::OffsetDateTime;

use crate::entity::{BookId, Borrower};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum BookEvent {
    Added {
        id: BookId,
        on: OffsetDateTime,
    },
    Borrowed {
        id: BookId,
        by: Borrower,
        on: OffsetDateTime,
    },
    Returned {
        id: BookId,
        on: OffsetDateTime,
    },
    Removed {
        id: BookId,
        on: OffsetDateTime,
    },
}
