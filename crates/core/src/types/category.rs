//! Vendor categories and the category filter used on the vendor list.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a category name is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown vendor category: {0}")]
pub struct CategoryError(pub String);

/// The fixed set of vendor categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VendorCategory {
    Grocery,
    Organic,
    Pharmacy,
    Bakery,
    Butcher,
    Seafood,
}

impl VendorCategory {
    /// Every category, in the order the filter bar shows them.
    pub const ALL: [Self; 6] = [
        Self::Grocery,
        Self::Organic,
        Self::Pharmacy,
        Self::Bakery,
        Self::Butcher,
        Self::Seafood,
    ];

    /// Display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Grocery => "Grocery",
            Self::Organic => "Organic",
            Self::Pharmacy => "Pharmacy",
            Self::Bakery => "Bakery",
            Self::Butcher => "Butcher",
            Self::Seafood => "Seafood",
        }
    }
}

impl fmt::Display for VendorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VendorCategory {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CategoryError(s.to_owned()))
    }
}

/// Category filter on the vendor list: everything, or one category.
///
/// Parses from and displays as `"All"` or the category name.
///
/// ```
/// use sixam_core::{CategoryFilter, VendorCategory};
///
/// assert_eq!("All".parse(), Ok(CategoryFilter::All));
/// assert_eq!(
///     "Bakery".parse(),
///     Ok(CategoryFilter::Only(VendorCategory::Bakery))
/// );
/// assert!("Hardware".parse::<CategoryFilter>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(VendorCategory),
}

impl CategoryFilter {
    /// Name of the catch-all filter.
    pub const ALL_NAME: &'static str = "All";

    /// Every filter option, `All` first.
    #[must_use]
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(VendorCategory::ALL.into_iter().map(Self::Only))
            .collect()
    }

    /// Whether a vendor in `category` passes this filter.
    #[must_use]
    pub fn admits(&self, category: VendorCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => *only == category,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => Self::ALL_NAME,
            Self::Only(category) => category.as_str(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_NAME {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = CategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_owned()
    }
}
