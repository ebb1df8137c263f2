use std::fmt::{Display, Formatter};

use error_stack::Report;
use vodca::AsRefln;

use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Hash, AsRefln)]
pub struct BookTitle(String);

impl BookTitle {
    /// Trims the input and rejects blank titles.
    pub fn new(title: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(Report::new(KernelError::MalformedValue)
                .attach_printable("The title must not be blank"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl Display for BookTitle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod test {
    use super::BookTitle;

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let title = BookTitle::new("  Clean Code  ").unwrap();
        assert_eq!(title.to_string(), "Clean Code");
    }

    #[test]
    fn blank_titles_are_rejected() {
        assert!(BookTitle::new("").is_err());
        assert!(BookTitle::new("   ").is_err());
        assert!(BookTitle::new("\t\n").is_err());
    }
}
