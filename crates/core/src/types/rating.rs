//! Vendor rating type.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// The value is outside the 0–5 scale.
    #[error("rating must be between {min} and {max} (got {value})")]
    OutOfRange {
        /// Offending value.
        value: Decimal,
        /// Lowest allowed rating.
        min: Decimal,
        /// Highest allowed rating.
        max: Decimal,
    },
}

/// A star rating on a 0–5 scale.
///
/// ## Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use sixam_core::Rating;
///
/// assert_eq!(Rating::new(Decimal::new(47, 1)).unwrap().to_string(), "4.7");
/// assert!(Rating::new(Decimal::new(51, 1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Rating(Decimal);

impl Rating {
    /// Lowest possible rating.
    pub const MIN: Decimal = Decimal::ZERO;
    /// Highest possible rating.
    pub const MAX: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

    /// Create a rating, validating the 0–5 range.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] for values below 0 or above 5.
    pub fn new(value: Decimal) -> Result<Self, RatingError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(RatingError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// The rating value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Rating {
    type Error = RatingError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for Decimal {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
