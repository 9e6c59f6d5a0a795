//! Values derived from [`SessionState`] on every read. Nothing here is stored.

use sixam_core::{CurrencyCode, Price, Vendor};

use super::state::SessionState;
use crate::catalog::Catalog;

impl SessionState {
    /// Σ price × quantity over the cart.
    #[must_use]
    pub fn cart_subtotal(&self) -> Price {
        self.cart
            .items()
            .iter()
            .map(|item| item.product.price.times(item.quantity))
            .sum()
    }

    /// Selected vendor's fee, or zero on the vendor list.
    #[must_use]
    pub fn delivery_fee(&self) -> Price {
        self.selected_vendor
            .as_ref()
            .map_or(Price::zero(CurrencyCode::default()), |vendor| {
                vendor.delivery_fee
            })
    }

    /// Subtotal plus delivery fee.
    #[must_use]
    pub fn order_total(&self) -> Price {
        self.cart_subtotal() + self.delivery_fee()
    }

    /// Units in the cart, for the header badge.
    #[must_use]
    pub fn cart_item_count(&self) -> u32 {
        self.cart
            .items()
            .iter()
            .fold(0_u32, |sum, item| sum.saturating_add(item.quantity))
    }

    /// Vendors passing the current search query and category filter, in
    /// catalog order.
    #[must_use]
    pub fn filtered_vendors<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Vendor> {
        catalog
            .vendors()
            .iter()
            .filter(|vendor| {
                vendor.matches_query(&self.search_query)
                    && self.category_filter.admits(vendor.category)
            })
            .collect()
    }
}
