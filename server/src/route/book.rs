use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use uuid::Uuid;

use application::service::BookCollection;
use kernel::prelude::entity::BookId;

use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    BorrowBookRequest, CreateBookRequest, UpdateAuthorsRequest, UpdateNumberOfPagesRequest,
    UpdateTitleRequest,
};
use crate::response::{BookResponse, CreatedResponse};

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(|State(module): State<AppModule>| async move {
                module
                    .get_all_books()
                    .await
                    .map(|records| {
                        Json(
                            records
                                .into_iter()
                                .map(BookResponse::from)
                                .collect::<Vec<_>>(),
                        )
                    })
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>, Json(req): Json<CreateBookRequest>| async move {
                    let book = req.into_book().map_err(ErrorStatus::from)?;
                    module
                        .add_book(book)
                        .await
                        .map(CreatedResponse::from)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/books/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    module
                        .get_book(&BookId::new(id))
                        .await
                        .map(BookResponse::from)
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    module
                        .remove_book(&BookId::new(id))
                        .await
                        .map(|_| StatusCode::NO_CONTENT)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/books/:id/title",
            put(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdateTitleRequest>| async move {
                    let title = req.into_title().map_err(ErrorStatus::from)?;
                    module
                        .update_book(&BookId::new(id), move |record| {
                            Ok(record.change_title(title))
                        })
                        .await
                        .map(BookResponse::from)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/books/:id/authors",
            put(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdateAuthorsRequest>| async move {
                    let authors = req.into_authors().map_err(ErrorStatus::from)?;
                    module
                        .update_book(&BookId::new(id), move |record| {
                            Ok(record.change_authors(authors))
                        })
                        .await
                        .map(BookResponse::from)
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    module
                        .update_book(&BookId::new(id), |record| {
                            Ok(record.change_authors(Vec::new()))
                        })
                        .await
                        .map(BookResponse::from)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/books/:id/numberOfPages",
            put(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdateNumberOfPagesRequest>| async move {
                    let pages = req.into_number_of_pages().map_err(ErrorStatus::from)?;
                    module
                        .update_book(&BookId::new(id), move |record| {
                            Ok(record.change_number_of_pages(Some(pages)))
                        })
                        .await
                        .map(BookResponse::from)
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    module
                        .update_book(&BookId::new(id), |record| {
                            Ok(record.change_number_of_pages(None))
                        })
                        .await
                        .map(BookResponse::from)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/books/:id/borrow",
            post(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<BorrowBookRequest>| async move {
                    let borrower = req.into_borrower().map_err(ErrorStatus::from)?;
                    module
                        .borrow_book(&BookId::new(id), borrower)
                        .await
                        .map(BookResponse::from)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/books/:id/return",
            post(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    module
                        .return_book(&BookId::new(id))
                        .await
                        .map(BookResponse::from)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
