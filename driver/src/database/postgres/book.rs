use error_stack::{Report, ResultExt};
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::database::BookDataStore;
use kernel::prelude::entity::{
    Book, BookAuthor, BookId, BookRecord, BookState, BookTitle, BorrowedAt, Borrower, Isbn13,
    NumberOfPages,
};
use kernel::KernelError;

use crate::database::postgres::PostgresDatabase;
use crate::error::ConvertError;

#[derive(sqlx::FromRow)]
struct BookRow {
    id: Uuid,
    isbn: String,
    title: String,
    authors: Vec<String>,
    number_of_pages: Option<i32>,
    borrowed_by: Option<String>,
    borrowed_at: Option<OffsetDateTime>,
}

// Stored rows passed validation when they were written, so a constructor
// failure here is store corruption, not client input.
impl TryFrom<BookRow> for BookRecord {
    type Error = Report<KernelError>;
    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        let isbn = Isbn13::new(row.isbn).change_context(KernelError::Internal)?;
        let title = BookTitle::new(row.title).change_context(KernelError::Internal)?;
        let authors = row
            .authors
            .into_iter()
            .map(|author| BookAuthor::new(author).change_context(KernelError::Internal))
            .collect::<error_stack::Result<Vec<_>, _>>()?;
        let number_of_pages = row
            .number_of_pages
            .map(NumberOfPages::new)
            .transpose()
            .change_context(KernelError::Internal)?;
        let state = match (row.borrowed_by, row.borrowed_at) {
            (None, None) => BookState::Available,
            (Some(by), Some(on)) => BookState::Borrowed {
                by: Borrower::new(by).change_context(KernelError::Internal)?,
                on: BorrowedAt::new(on),
            },
            _ => {
                return Err(Report::new(KernelError::Internal)
                    .attach_printable(format!("Book row {} is half borrowed", row.id)))
            }
        };
        Ok(BookRecord::restore(
            BookId::new(row.id),
            Book::new(isbn, title, authors, number_of_pages),
            state,
        ))
    }
}

fn author_values(record: &BookRecord) -> Vec<String> {
    record
        .book()
        .authors()
        .iter()
        .map(|author| author.as_ref().clone())
        .collect()
}

fn borrow_columns(record: &BookRecord) -> (Option<&String>, Option<&OffsetDateTime>) {
    match record.state() {
        BookState::Available => (None, None),
        BookState::Borrowed { by, on } => (Some(by.as_ref()), Some(on.as_ref())),
    }
}

#[async_trait::async_trait]
impl BookDataStore for PostgresDatabase {
    async fn find_all(&self) -> error_stack::Result<Vec<BookRecord>, KernelError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, isbn, title, authors, number_of_pages, borrowed_by, borrowed_at
            FROM books
            "#,
        )
        .fetch_all(self.pool())
        .await
        .convert_error()?;
        rows.into_iter().map(BookRecord::try_from).collect()
    }

    async fn find_by_id(
        &self,
        id: &BookId,
    ) -> error_stack::Result<Option<BookRecord>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, isbn, title, authors, number_of_pages, borrowed_by, borrowed_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(self.pool())
        .await
        .convert_error()?;
        row.map(BookRecord::try_from).transpose()
    }

    async fn exists_by_id(&self, id: &BookId) -> error_stack::Result<bool, KernelError> {
        let exists = sqlx::query_scalar::<_, bool>(
            // language=postgresql
            r#"
            SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)
            "#,
        )
        .bind(id.as_ref())
        .fetch_one(self.pool())
        .await
        .convert_error()?;
        Ok(exists)
    }

    async fn create_or_update(
        &self,
        record: BookRecord,
    ) -> error_stack::Result<BookRecord, KernelError> {
        let (borrowed_by, borrowed_at) = borrow_columns(&record);
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            INSERT INTO books (id, isbn, title, authors, number_of_pages, borrowed_by, borrowed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE
                SET isbn            = EXCLUDED.isbn,
                    title           = EXCLUDED.title,
                    authors         = EXCLUDED.authors,
                    number_of_pages = EXCLUDED.number_of_pages,
                    borrowed_by     = EXCLUDED.borrowed_by,
                    borrowed_at     = EXCLUDED.borrowed_at
            RETURNING id, isbn, title, authors, number_of_pages, borrowed_by, borrowed_at
            "#,
        )
        .bind(record.id().as_ref())
        .bind(record.book().isbn().as_ref())
        .bind(record.book().title().as_ref())
        .bind(author_values(&record))
        .bind(
            record
                .book()
                .number_of_pages()
                .as_ref()
                .map(|pages| *pages.as_ref()),
        )
        .bind(borrowed_by)
        .bind(borrowed_at)
        .fetch_one(self.pool())
        .await
        .convert_error()?;
        BookRecord::try_from(row)
    }

    async fn delete(&self, record: &BookRecord) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM books
            WHERE id = $1
            "#,
        )
        .bind(record.id().as_ref())
        .execute(self.pool())
        .await
        .convert_error()?;
        Ok(())
    }
}
