//! Catalog listings: vendors and the products they sell.
//!
//! Both are immutable reference data. Products are not scoped to a vendor;
//! every vendor shows the same product list.

use serde::{Deserialize, Serialize};

use super::category::VendorCategory;
use super::id::{ProductId, VendorId};
use super::price::Price;
use super::rating::Rating;

/// A delivery-capable merchant shown in the browse list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub rating: Rating,
    /// Display range, e.g. "20-30 min".
    pub delivery_time: String,
    pub delivery_fee: Price,
    pub category: VendorCategory,
    /// Display distance, e.g. "0.8 km".
    pub distance: String,
}

impl Vendor {
    /// Case-insensitive substring match of `query` against the vendor's name
    /// or category name. An empty query matches every vendor.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.category.as_str().to_lowercase().contains(&needle)
    }
}

/// A purchasable catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub description: String,
    /// Free-form shelf category, e.g. "Dairy".
    pub category: String,
}
