mod author;
mod id;
mod isbn;
mod pages;
mod title;

pub use self::{author::*, id::*, isbn::*, pages::*, title::*};
use destructure::Destructure;
use vodca::References;

/// Bibliographic data of a catalog entry. The identifier and the borrow
/// state live on [`crate::entity::BookRecord`], not here.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    isbn: Isbn13,
    title: BookTitle,
    authors: Vec<BookAuthor>,
    number_of_pages: Option<NumberOfPages>,
}

impl Book {
    pub fn new(
        isbn: Isbn13,
        title: BookTitle,
        authors: Vec<BookAuthor>,
        number_of_pages: Option<NumberOfPages>,
    ) -> Self {
        Self {
            isbn,
            title,
            authors,
            number_of_pages,
        }
    }

    pub fn change_title(self, title: BookTitle) -> Self {
        Self { title, ..self }
    }

    pub fn change_authors(self, authors: Vec<BookAuthor>) -> Self {
        Self { authors, ..self }
    }

    pub fn change_number_of_pages(self, number_of_pages: Option<NumberOfPages>) -> Self {
        Self {
            number_of_pages,
            ..self
        }
    }
}
