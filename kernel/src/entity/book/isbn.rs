use std::fmt::{Display, Formatter};

use error_stack::Report;
use vodca::AsRefln;

use crate::KernelError;

/// 13 digit ISBN with a valid checksum. Constructed through [`Isbn13::new`]
/// only, so an instance always holds a well-formed number.
#[derive(Debug, Clone, Eq, PartialEq, Hash, AsRefln)]
pub struct Isbn13(String);

impl Isbn13 {
    pub fn new(value: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let value = value.into();
        let well_formed = value.len() == 13 && value.bytes().all(|byte| byte.is_ascii_digit());
        if !well_formed || weighted_sum(&value) % 10 != 0 {
            return Err(Report::new(KernelError::MalformedValue)
                .attach_printable(format!("This is not a valid ISBN-13 number: {value}")));
        }
        Ok(Self(value))
    }
}

// Positions counted from the left, weights alternating 1 and 3. A conforming
// number sums to a multiple of ten including its check digit.
fn weighted_sum(digits: &str) -> u32 {
    digits
        .bytes()
        .map(|byte| u32::from(byte - b'0'))
        .enumerate()
        .map(|(position, digit)| if position % 2 == 0 { digit } else { digit * 3 })
        .sum()
}

impl Display for Isbn13 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
