//! Review star rating.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// The input is not a number, or has a fractional part.
    #[error("rating must be a whole number")]
    NotANumber,
    /// The value is outside `1..=5`.
    #[error("rating must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Rejected value.
        value: i64,
        /// Smallest accepted rating.
        min: u8,
        /// Largest accepted rating.
        max: u8,
    },
}

/// A whole-star rating from 1 to 5.
///
/// Text input is read as a decimal number, so `"3.0"` and `"3e0"` are both
/// three stars, while `"4.5"` is rejected.
///
/// ```
/// use demo_shop_core::Rating;
///
/// assert_eq!(Rating::new(4).map(|r| r.get()), Ok(4));
/// assert!(Rating::new(6).is_err());
/// assert_eq!("3.0".parse::<Rating>().map(|r| r.get()), Ok(3));
/// assert!("4.5".parse::<Rating>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest rating.
    pub const MIN: u8 = 1;
    /// Highest rating.
    pub const MAX: u8 = 5;

    /// Create a rating, checking the range.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] outside `1..=5`.
    pub fn new(value: i64) -> Result<Self, RatingError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or(RatingError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
    }

    /// The number of stars.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Rating {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<f64>().map_err(|_| RatingError::NotANumber)?;
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(RatingError::NotANumber);
        }

        // Whole and finite; `as` saturates outside the i64 range.
        #[allow(clippy::cast_possible_truncation)]
        let whole = value as i64;
        Self::new(whole)
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}
