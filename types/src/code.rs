//! Fixed-length numeric codes.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced when constructing a [`Code`] from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodeError {
    /// A character outside `'0'..='9'` was found.
    ///
    /// `position` is the zero-based index of the offending character. The
    /// whole entry is aborted; none of the characters before it are kept.
    #[error("invalid digit {found:?} at position {position}, only numbers 0 through 9 are accepted")]
    InvalidDigit { position: usize, found: char },

    /// The input did not hold exactly the required number of digits.
    #[error("expected exactly {expected} digits, got {found}")]
    WrongLength { expected: usize, found: usize },
}

/// An ordered sequence of exactly `LEN` decimal digits.
///
/// Digits are stored as values in `[0, 9]`, never as ASCII bytes. A `Code`
/// is always fully populated: construction either validates every position
/// or fails, so a partially entered code is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code<const LEN: usize>([u8; LEN]);

impl<const LEN: usize> Code<LEN> {
    /// Construct a code from raw digit values.
    ///
    /// # Panics
    ///
    /// Panics if any value is outside `[0, 9]`. Callers producing digits
    /// arithmetically (`% 10`) satisfy this by construction.
    #[must_use]
    pub fn from_digits(digits: [u8; LEN]) -> Self {
        assert!(
            digits.iter().all(|&d| d <= 9),
            "Code digits must be in [0, 9]"
        );
        Self(digits)
    }

    /// The digit values, in order.
    #[must_use]
    pub fn digits(&self) -> &[u8; LEN] {
        &self.0
    }
}

impl<const LEN: usize> FromStr for Code<LEN> {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut digits = [0u8; LEN];
        let mut found = 0usize;
        for (position, ch) in s.chars().enumerate() {
            let Some(value) = ch.to_digit(10) else {
                return Err(CodeError::InvalidDigit {
                    position,
                    found: ch,
                });
            };
            if position >= LEN {
                return Err(CodeError::WrongLength {
                    expected: LEN,
                    found: s.chars().count(),
                });
            }
            digits[position] = value as u8;
            found = position + 1;
        }
        if found != LEN {
            return Err(CodeError::WrongLength {
                expected: LEN,
                found,
            });
        }
        Ok(Self(digits))
    }
}

impl<const LEN: usize> TryFrom<&str> for Code<LEN> {
    type Error = CodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl<const LEN: usize> fmt::Display for Code<LEN> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
