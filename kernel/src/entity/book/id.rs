use std::fmt::{Display, Formatter};

use error_stack::ResultExt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookId(Uuid);

impl BookId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }

    /// Draws a fresh random identifier. Uniqueness against the data store is
    /// the generator's job, not this function's.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> error_stack::Result<Self, KernelError> {
        Uuid::parse_str(value)
            .map(Self)
            .change_context(KernelError::MalformedValue)
            .attach_printable_lazy(|| format!("This is not a valid book id: {value}"))
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod test {
    use super::BookId;

    #[test]
    fn parse_round_trips_the_rendered_form() {
        let id = BookId::generate();
        let parsed = BookId::parse(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_non_uuid_input() {
        assert!(BookId::parse("not-a-book-id").is_err());
        assert!(BookId::parse("").is_err());
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(BookId::generate(), BookId::generate());
    }
}
