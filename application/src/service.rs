mod book;
mod id;

pub use self::{book::*, id::*};
