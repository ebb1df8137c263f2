use error_stack::Report;

use crate::entity::{BorrowedAt, Borrower};
use crate::KernelError;

/// Borrow status of a catalog copy. A record cycles between these two
/// states for its whole life; there is no terminal state.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum BookState {
    Available,
    Borrowed { by: Borrower, on: BorrowedAt },
}

impl BookState {
    pub fn borrow(self, by: Borrower, on: BorrowedAt) -> error_stack::Result<Self, KernelError> {
        match self {
            Self::Available => Ok(Self::Borrowed { by, on }),
            Self::Borrowed { .. } => Err(Report::new(KernelError::NotPossible)
                .attach_printable("The book is already borrowed")),
        }
    }

    pub fn give_back(self) -> error_stack::Result<Self, KernelError> {
        match self {
            Self::Borrowed { .. } => Ok(Self::Available),
            Self::Available => Err(Report::new(KernelError::NotPossible)
                .attach_printable("The book was already returned")),
        }
    }
}

#[cfg(test)]
mod test {
    use time::OffsetDateTime;

    use super::BookState;
    use crate::entity::{BorrowedAt, Borrower};
    use crate::KernelError;

    fn borrower() -> Borrower {
        Borrower::new("Uncle Bob").unwrap()
    }

    fn at() -> BorrowedAt {
        BorrowedAt::new(OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap())
    }

    #[test]
    fn available_can_be_borrowed() {
        let state = BookState::Available.borrow(borrower(), at()).unwrap();
        assert_eq!(
            state,
            BookState::Borrowed {
                by: borrower(),
                on: at()
            }
        );
    }

    #[test]
    fn borrowed_cannot_be_borrowed_again() {
        let state = BookState::Available.borrow(borrower(), at()).unwrap();
        let error = state.borrow(borrower(), at()).unwrap_err();
        assert!(matches!(
            error.current_context(),
            KernelError::NotPossible
        ));
    }

    #[test]
    fn borrowed_can_be_given_back() {
        let state = BookState::Available.borrow(borrower(), at()).unwrap();
        assert_eq!(state.give_back().unwrap(), BookState::Available);
    }

    #[test]
    fn available_cannot_be_given_back() {
        let error = BookState::Available.give_back().unwrap_err();
        assert!(matches!(
            error.current_context(),
            KernelError::NotPossible
        ));
    }
}
