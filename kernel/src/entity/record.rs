mod borrowed_at;
mod state;

pub use self::{borrowed_at::*, state::*};
use destructure::Destructure;
use vodca::References;

use crate::entity::{Book, BookAuthor, BookId, BookTitle, Borrower, NumberOfPages};
use crate::KernelError;

/// Aggregate root tying an identifier to bibliographic data and the borrow
/// state. Every operation returns a new value; persisting it is the
/// caller's responsibility.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct BookRecord {
    id: BookId,
    book: Book,
    state: BookState,
}

impl BookRecord {
    /// A freshly added book always enters the collection available.
    pub fn new(id: BookId, book: Book) -> Self {
        Self {
            id,
            book,
            state: BookState::Available,
        }
    }

    /// Rebuilds a persisted record. Only the data store mapping should need
    /// this; everything else goes through [`BookRecord::new`] and the
    /// transition methods.
    pub fn restore(id: BookId, book: Book, state: BookState) -> Self {
        Self { id, book, state }
    }

    pub fn change_title(self, title: BookTitle) -> Self {
        Self {
            book: self.book.change_title(title),
            ..self
        }
    }

    pub fn change_authors(self, authors: Vec<BookAuthor>) -> Self {
        Self {
            book: self.book.change_authors(authors),
            ..self
        }
    }

    pub fn change_number_of_pages(self, number_of_pages: Option<NumberOfPages>) -> Self {
        Self {
            book: self.book.change_number_of_pages(number_of_pages),
            ..self
        }
    }

    pub fn borrow(self, by: Borrower, on: BorrowedAt) -> error_stack::Result<Self, KernelError> {
        let state = self.state.borrow(by, on)?;
        Ok(Self { state, ..self })
    }

    pub fn give_back(self) -> error_stack::Result<Self, KernelError> {
        let state = self.state.give_back()?;
        Ok(Self { state, ..self })
    }
}

#[cfg(test)]
mod test {
    use time::OffsetDateTime;

    use super::{BookRecord, BookState, BorrowedAt};
    use crate::entity::{Book, BookAuthor, BookId, BookTitle, Borrower, Isbn13, NumberOfPages};
    use crate::KernelError;

    fn clean_code() -> Book {
        Book::new(
            Isbn13::new("9780132350884").unwrap(),
            BookTitle::new("Clean Code").unwrap(),
            vec![BookAuthor::new("Robert C. Martin").unwrap()],
            Some(NumberOfPages::new(464).unwrap()),
        )
    }

    fn at() -> BorrowedAt {
        BorrowedAt::new(OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap())
    }

    #[test]
    fn fresh_records_are_available() {
        let record = BookRecord::new(BookId::generate(), clean_code());
        assert_eq!(record.state(), &BookState::Available);
    }

    #[test]
    fn borrow_then_give_back_restores_the_original_book_data() {
        let record = BookRecord::new(BookId::generate(), clean_code());
        let original = record.clone();

        let returned = record
            .borrow(Borrower::new("Uncle Bob").unwrap(), at())
            .unwrap()
            .give_back()
            .unwrap();

        assert_eq!(returned, original);
    }

    #[test]
    fn borrowing_twice_in_a_row_is_not_possible() {
        let record = BookRecord::new(BookId::generate(), clean_code());
        let borrowed = record
            .borrow(Borrower::new("Uncle Bob").unwrap(), at())
            .unwrap();

        let error = borrowed
            .borrow(Borrower::new("Aunt Alice").unwrap(), at())
            .unwrap_err();
        assert!(matches!(error.current_context(), KernelError::NotPossible));
    }

    #[test]
    fn giving_back_a_never_borrowed_record_is_not_possible() {
        let record = BookRecord::new(BookId::generate(), clean_code());
        let error = record.give_back().unwrap_err();
        assert!(matches!(error.current_context(), KernelError::NotPossible));
    }

    #[test]
    fn change_title_replaces_only_the_title() {
        let id = BookId::generate();
        let record = BookRecord::new(id.clone(), clean_code());

        let changed = record.change_title(BookTitle::new("Clean Coder").unwrap());

        assert_eq!(changed.id(), &id);
        assert_eq!(changed.book().title().to_string(), "Clean Coder");
        assert_eq!(changed.book().isbn(), clean_code().isbn());
        assert_eq!(changed.book().authors(), clean_code().authors());
    }

    #[test]
    fn change_authors_can_clear_all_authors() {
        let record = BookRecord::new(BookId::generate(), clean_code());
        let changed = record.change_authors(Vec::new());
        assert!(changed.book().authors().is_empty());
    }

    #[test]
    fn change_number_of_pages_can_clear_the_page_count() {
        let record = BookRecord::new(BookId::generate(), clean_code());
        let changed = record.change_number_of_pages(None);
        assert_eq!(changed.book().number_of_pages(), &None);
    }

    #[test]
    fn mutating_a_borrowed_record_keeps_its_state() {
        let record = BookRecord::new(BookId::generate(), clean_code());
        let borrowed = record
            .borrow(Borrower::new("Uncle Bob").unwrap(), at())
            .unwrap();
        let state = borrowed.state().clone();

        let changed = borrowed.change_number_of_pages(Some(NumberOfPages::new(500).unwrap()));

        assert_eq!(changed.state(), &state);
    }
}
