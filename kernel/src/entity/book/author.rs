use std::fmt::{Display, Formatter};

use error_stack::Report;
use vodca::AsRefln;

use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Hash, AsRefln)]
pub struct BookAuthor(String);

impl BookAuthor {
    /// Trims the input and rejects blank author names.
    pub fn new(author: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let author = author.into();
        let trimmed = author.trim();
        if trimmed.is_empty() {
            return Err(Report::new(KernelError::MalformedValue)
                .attach_printable("The author must not be blank"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl Display for BookAuthor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod test {
    use super::BookAuthor;

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let author = BookAuthor::new(" Robert C. Martin ").unwrap();
        assert_eq!(author.to_string(), "Robert C. Martin");
    }

    #[test]
    fn blank_authors_are_rejected() {
        assert!(BookAuthor::new("").is_err());
        assert!(BookAuthor::new("  ").is_err());
    }
}
