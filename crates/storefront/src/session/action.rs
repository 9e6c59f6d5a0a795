//! User interactions that change [`SessionState`](super::SessionState).

use sixam_core::{AddressPatch, CategoryFilter, DeliveryWindow, Product, ProductId, Vendor};

/// One discrete user interaction.
///
/// Route handlers resolve ids against the catalog before building an action,
/// so vendor and product payloads are always real catalog entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open a vendor's product grid, or return to the vendor list with `None`.
    SelectVendor(Option<Vendor>),
    SetSearchQuery(String),
    SetCategoryFilter(CategoryFilter),
    AddToCart(Product),
    RemoveFromCart(ProductId),
    /// Replace a line's quantity. Values below 1 are ignored.
    SetQuantity {
        product_id: ProductId,
        quantity: i64,
    },
    OpenCart,
    CloseCart,
    AdvanceCheckout,
    SetAddress(AddressPatch),
    SetDeliveryWindow(DeliveryWindow),
}

impl Action {
    /// Short name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SelectVendor(_) => "select_vendor",
            Self::SetSearchQuery(_) => "set_search_query",
            Self::SetCategoryFilter(_) => "set_category_filter",
            Self::AddToCart(_) => "add_to_cart",
            Self::RemoveFromCart(_) => "remove_from_cart",
            Self::SetQuantity { .. } => "set_quantity",
            Self::OpenCart => "open_cart",
            Self::CloseCart => "close_cart",
            Self::AdvanceCheckout => "advance_checkout",
            Self::SetAddress(_) => "set_address",
            Self::SetDeliveryWindow(_) => "set_delivery_window",
        }
    }

    /// The catalog id an action is about, as a `(key, id)` breadcrumb pair.
    #[must_use]
    pub fn subject(&self) -> Option<(&'static str, &str)> {
        match self {
            Self::SelectVendor(Some(vendor)) => Some(("vendor_id", vendor.id.as_str())),
            Self::AddToCart(product) => Some(("product_id", product.id.as_str())),
            Self::RemoveFromCart(product_id) | Self::SetQuantity { product_id, .. } => {
                Some(("product_id", product_id.as_str()))
            }
            _ => None,
        }
    }
}
