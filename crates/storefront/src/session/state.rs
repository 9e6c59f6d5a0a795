//! Per-browser storefront state.
//!
//! [`SessionState`] is a plain value: everything the page shows is either
//! stored here or computed from it (see [`super::totals`]). It is serialised
//! into the tower-sessions record between requests.

use serde::{Deserialize, Serialize};

use sixam_core::{
    CategoryFilter, CheckoutStep, DeliveryAddress, DeliveryWindow, Product, ProductId, Vendor,
};

/// A product in the cart with its quantity.
///
/// `quantity` is at least 1; the cart never holds a zero-quantity line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Product id of this line.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.product.id
    }
}

/// Ordered cart lines, unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Look up the line for a product.
    #[must_use]
    pub fn get(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == product_id)
    }

    /// Add one unit: bump an existing line or append a new one.
    pub(crate) fn add_one(&mut self, product: Product) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id() == &product.id) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.items.push(CartItem {
                product,
                quantity: 1,
            });
        }
    }

    /// Drop the line for `product_id`, if present.
    pub(crate) fn remove(&mut self, product_id: &ProductId) {
        self.items.retain(|item| item.id() != product_id);
    }

    /// Replace a line's quantity. Callers guarantee `quantity >= 1`.
    pub(crate) fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        debug_assert!(quantity >= 1);
        if let Some(item) = self.items.iter_mut().find(|item| item.id() == product_id) {
            item.quantity = quantity;
        }
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}

/// Everything one shopper's storefront page is derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// `None` while browsing the vendor list.
    pub selected_vendor: Option<Vendor>,
    pub search_query: String,
    pub category_filter: CategoryFilter,
    pub cart: Cart,
    pub cart_open: bool,
    pub checkout_step: CheckoutStep,
    pub address: DeliveryAddress,
    pub delivery_window: DeliveryWindow,
}
