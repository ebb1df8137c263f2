use error_stack::Report;
use vodca::AsRefln;

use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Hash, AsRefln)]
pub struct NumberOfPages(i32);

impl NumberOfPages {
    pub fn new(pages: impl Into<i32>) -> error_stack::Result<Self, KernelError> {
        let pages = pages.into();
        if pages < 1 {
            return Err(Report::new(KernelError::MalformedValue)
                .attach_printable(format!("The number of pages must be positive: {pages}")));
        }
        Ok(Self(pages))
    }
}

#[cfg(test)]
mod test {
    use super::NumberOfPages;

    #[test]
    fn positive_page_counts_are_accepted() {
        assert_eq!(*NumberOfPages::new(1).unwrap().as_ref(), 1);
        assert_eq!(*NumberOfPages::new(464).unwrap().as_ref(), 464);
    }

    #[test]
    fn zero_and_negative_page_counts_are_rejected() {
        assert!(NumberOfPages::new(0).is_err());
        assert!(NumberOfPages::new(-1).is_err());
    }
}
