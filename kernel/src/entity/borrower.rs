use std::fmt::{Display, Formatter};

use error_stack::Report;
use vodca::AsRefln;

use crate::KernelError;

/// Person currently holding a borrowed book. Names start with a word
/// character and may continue with word characters, spaces or hyphens,
/// up to 50 characters.
#[derive(Debug, Clone, Eq, PartialEq, Hash, AsRefln)]
pub struct Borrower(String);

impl Borrower {
    pub fn new(name: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(Report::new(KernelError::MalformedValue)
                .attach_printable(format!("This is not a valid borrower name: {name}")));
        }
        Ok(Self(name))
    }
}

fn is_valid_name(name: &str) -> bool {
    if name.chars().count() > 50 {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_word_char(first) => {
            chars.all(|c| is_word_char(c) || c == ' ' || c == '-')
        }
        _ => false,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl Display for Borrower {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod test {
    use super::Borrower;

    #[test]
    fn common_names_are_accepted() {
        for name in ["Uncle Bob", "slu", "Motoko-Kusanagi", "Jean_Luc", "R2"] {
            assert!(Borrower::new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn unicode_word_characters_are_accepted() {
        assert!(Borrower::new("Åsa Öberg").is_ok());
    }

    #[test]
    fn invalid_names_are_rejected() {
        assert!(Borrower::new("").is_err());
        assert!(Borrower::new(" leading space").is_err());
        assert!(Borrower::new("-leading-hyphen").is_err());
        assert!(Borrower::new("semi;colon").is_err());
        assert!(Borrower::new("a".repeat(51)).is_err());
    }

    #[test]
    fn fifty_characters_is_the_upper_bound() {
        assert!(Borrower::new("a".repeat(50)).is_ok());
    }
}
