//! Catalog listing and validation.
//!
//! Vendor filtering goes through the storefront's own session state, so the
//! CLI and the browse page can never disagree about which vendors match.

#![allow(clippy::print_stdout)]

use std::path::Path;

use tracing::info;

use sixam_core::CategoryFilter;
use sixam_storefront::catalog::{Catalog, CatalogError};
use sixam_storefront::session::{Action, SessionState, reduce};

/// Load the catalog file, or the built-in mock catalog when none is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is invalid.
pub fn load(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading catalog file");
            Catalog::from_json_file(path)
        }
        None => Catalog::mock(),
    }
}

/// Vendors matching `query` and `category`, formatted one per line.
///
/// # Errors
///
/// Returns an error if `category` is not a known category name.
pub fn vendor_lines(
    catalog: &Catalog,
    query: &str,
    category: &str,
) -> Result<Vec<String>, sixam_core::CategoryError> {
    let filter: CategoryFilter = category.parse()?;
    let state = [
        Action::SetSearchQuery(query.to_owned()),
        Action::SetCategoryFilter(filter),
    ]
    .into_iter()
    .fold(SessionState::default(), reduce);

    Ok(state
        .filtered_vendors(catalog)
        .into_iter()
        .map(|vendor| {
            format!(
                "{:<4} {:<20} {:<9} ★{:<4} {:<10} {} delivery, {}",
                vendor.id.as_str(),
                vendor.name,
                vendor.category.as_str(),
                vendor.rating.to_string(),
                vendor.delivery_time,
                vendor.delivery_fee,
                vendor.distance,
            )
        })
        .collect())
}

/// Print vendors matching `query` and `category`.
///
/// # Errors
///
/// Returns an error if `category` is not a known category name.
pub fn vendors(
    catalog: &Catalog,
    query: &str,
    category: &str,
) -> Result<(), sixam_core::CategoryError> {
    let lines = vendor_lines(catalog, query, category)?;
    info!(matches = lines.len(), "Vendors listed");
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// Print every product.
pub fn products(catalog: &Catalog) {
    for product in catalog.products() {
        println!(
            "{:<4} {:<20} {:>8}  {:<8} {}",
            product.id.as_str(),
            product.name,
            product.price.to_string(),
            product.category,
            product.description
        );
    }
}

/// Load a catalog file and report its size.
///
/// # Errors
///
/// Returns the first problem found in the file.
pub fn validate(path: &Path) -> Result<(), CatalogError> {
    let catalog = Catalog::from_json_file(path)?;
    println!(
        "{}: ok ({} vendors, {} products)",
        path.display(),
        catalog.vendors().len(),
        catalog.products().len()
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_lines_filtered() {
        let catalog = Catalog::mock().unwrap();
        let lines = vendor_lines(&catalog, "organic", "All").unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Organic Corner"));
        assert!(lines[0].contains("$3.49 delivery"));
    }

    #[test]
    fn test_vendor_lines_by_category() {
        let catalog = Catalog::mock().unwrap();
        let lines = vendor_lines(&catalog, "", "Pharmacy").unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Pharma Plus"));
    }

    #[test]
    fn test_vendor_lines_unknown_category() {
        let catalog = Catalog::mock().unwrap();
        assert!(vendor_lines(&catalog, "", "Hardware").is_err());
    }

    #[test]
    fn test_load_default_is_mock() {
        assert_eq!(load(None).unwrap().vendors().len(), 6);
    }
}
