use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use time::OffsetDateTime;

use kernel::prelude::entity::{BookRecord, BookState, DestructBook, DestructBookRecord};

#[derive(Debug, Serialize)]
pub struct BorrowedResponse {
    by: String,
    #[serde(with = "time::serde::rfc3339")]
    on: OffsetDateTime,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    id: String,
    isbn: String,
    title: String,
    authors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    number_of_pages: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    borrowed: Option<BorrowedResponse>,
}

impl From<BookRecord> for BookResponse {
    fn from(record: BookRecord) -> Self {
        let DestructBookRecord { id, book, state } = record.into_destruct();
        let DestructBook {
            isbn,
            title,
            authors,
            number_of_pages,
        } = book.into_destruct();
        let borrowed = match state {
            BookState::Available => None,
            BookState::Borrowed { by, on } => Some(BorrowedResponse {
                by: by.to_string(),
                on: *on.as_ref(),
            }),
        };
        Self {
            id: id.to_string(),
            isbn: isbn.to_string(),
            title: title.to_string(),
            authors: authors.iter().map(ToString::to_string).collect(),
            number_of_pages: number_of_pages.map(|pages| *pages.as_ref()),
            borrowed,
        }
    }
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse(BookResponse);

impl From<BookRecord> for CreatedResponse {
    fn from(record: BookRecord) -> Self {
        Self(BookResponse::from(record))
    }
}

impl IntoResponse for CreatedResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}
