//! Vendor and product reference data.
//!
//! The storefront ships with a built-in mock catalog (six vendors, six
//! products). Operators may point `STOREFRONT_CATALOG_PATH` at a JSON file of
//! the same shape instead. Either way the catalog is loaded once at startup
//! and never mutated.
//!
//! A loaded catalog is single-currency (USD, like every total the storefront
//! shows), prices are at most [`MAX_PRICE`], and ids are safe to put in a URL
//! path segment.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use sixam_core::{CurrencyCode, Price, Product, ProductId, Vendor, VendorId};

/// Built-in dataset.
const MOCK_CATALOG: &str = include_str!("../data/mock_catalog.json");

/// Largest accepted product price or delivery fee.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Errors loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate vendor id: {0}")]
    DuplicateVendor(VendorId),
    #[error("duplicate product id: {0}")]
    DuplicateProduct(ProductId),
    #[error("invalid id {0:?}: use letters, digits, '-' or '_'")]
    InvalidId(String),
    #[error("{item} is priced in {found:?}; catalog prices must be in {expected:?}")]
    Currency {
        item: String,
        found: CurrencyCode,
        expected: CurrencyCode,
    },
    #[error("{item} costs {amount}, above the 1000000 limit")]
    PriceTooLarge { item: String, amount: Decimal },
}

/// Immutable vendor and product lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    vendors: Vec<Vendor>,
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from lists, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns an error if two vendors or two products share an id.
    pub fn new(vendors: Vec<Vendor>, products: Vec<Product>) -> Result<Self, CatalogError> {
        let catalog = Self { vendors, products };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in mock dataset.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded dataset is malformed.
    pub fn mock() -> Result<Self, CatalogError> {
        Self::from_json(MOCK_CATALOG)
    }

    /// Parse and validate a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON, out-of-range ratings, negative
    /// prices, unknown vendor categories or duplicate ids.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails [`Self::from_json`].
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Check ids (unique, URL-safe) and prices (USD, at most [`MAX_PRICE`]).
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut vendor_ids = HashSet::new();
        for vendor in &self.vendors {
            check_id(vendor.id.as_str())?;
            if !vendor_ids.insert(&vendor.id) {
                return Err(CatalogError::DuplicateVendor(vendor.id.clone()));
            }
            check_price(&format!("vendor {}", vendor.id), vendor.delivery_fee)?;
        }

        let mut product_ids = HashSet::new();
        for product in &self.products {
            check_id(product.id.as_str())?;
            if !product_ids.insert(&product.id) {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
            check_price(&format!("product {}", product.id), product.price)?;
        }

        Ok(())
    }

    /// All vendors in display order.
    #[must_use]
    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    /// All products in display order. Shared by every vendor.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn vendor(&self, id: &VendorId) -> Option<&Vendor> {
        self.vendors.iter().find(|vendor| &vendor.id == id)
    }

    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }
}

/// Ids end up in form action paths such as `/vendors/{id}/select`.
fn check_id(id: &str) -> Result<(), CatalogError> {
    let safe = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if safe {
        Ok(())
    } else {
        Err(CatalogError::InvalidId(id.to_owned()))
    }
}

/// Totals are summed in one currency and must not overflow.
fn check_price(item: &str, price: Price) -> Result<(), CatalogError> {
    let expected = CurrencyCode::default();
    if price.currency_code() != expected {
        return Err(CatalogError::Currency {
            item: item.to_owned(),
            found: price.currency_code(),
            expected,
        });
    }
    if price.amount() > MAX_PRICE {
        return Err(CatalogError::PriceTooLarge {
            item: item.to_owned(),
            amount: price.amount(),
        });
    }
    Ok(())
}
