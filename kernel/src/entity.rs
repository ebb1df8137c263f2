mod book;
mod borrower;
mod record;

pub use self::{book::*, borrower::*, record::*};
