use serde::Deserialize;

use kernel::prelude::entity::{
    Book, BookAuthor, BookTitle, Borrower, Isbn13, NumberOfPages,
};
use kernel::KernelError;

#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    isbn: String,
    title: String,
}

impl CreateBookRequest {
    /// New catalog entries start without authors or a page count; both are
    /// set through their own update endpoints.
    pub fn into_book(self) -> error_stack::Result<Book, KernelError> {
        Ok(Book::new(
            Isbn13::new(self.isbn)?,
            BookTitle::new(self.title)?,
            Vec::new(),
            None,
        ))
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateTitleRequest {
    title: String,
}

impl UpdateTitleRequest {
    pub fn into_title(self) -> error_stack::Result<BookTitle, KernelError> {
        BookTitle::new(self.title)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateAuthorsRequest {
    authors: Vec<String>,
}

impl UpdateAuthorsRequest {
    pub fn into_authors(self) -> error_stack::Result<Vec<BookAuthor>, KernelError> {
        self.authors.into_iter().map(BookAuthor::new).collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNumberOfPagesRequest {
    number_of_pages: i32,
}

impl UpdateNumberOfPagesRequest {
    pub fn into_number_of_pages(self) -> error_stack::Result<NumberOfPages, KernelError> {
        NumberOfPages::new(self.number_of_pages)
    }
}

#[derive(Debug, Deserialize)]
pub struct BorrowBookRequest {
    borrower: String,
}

impl BorrowBookRequest {
    pub fn into_borrower(self) -> error_stack::Result<Borrower, KernelError> {
        Borrower::new(self.borrower)
    }
}
