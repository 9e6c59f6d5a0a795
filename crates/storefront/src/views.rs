//! Display data for templates, built from session state and the catalog.
//!
//! Prices are formatted here so templates only ever see strings.

use sixam_core::{CategoryFilter, CheckoutStep, DeliveryAddress, DeliveryWindow, Product, Vendor};

use crate::catalog::Catalog;
use crate::session::{CartItem, SessionState};

/// Vendor card in the browse grid (and header of the product grid).
#[derive(Clone)]
pub struct VendorCardView {
    pub id: String,
    pub name: String,
    pub rating: String,
    pub delivery_time: String,
    pub delivery_fee: String,
    pub category: &'static str,
    pub distance: String,
}

impl From<&Vendor> for VendorCardView {
    fn from(vendor: &Vendor) -> Self {
        Self {
            id: vendor.id.to_string(),
            name: vendor.name.clone(),
            rating: vendor.rating.to_string(),
            delivery_time: vendor.delivery_time.clone(),
            delivery_fee: vendor.delivery_fee.to_string(),
            category: vendor.category.as_str(),
            distance: vendor.distance.clone(),
        }
    }
}

/// Product card in a vendor's grid.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
        }
    }
}

/// Category filter button.
#[derive(Clone)]
pub struct CategoryOptionView {
    pub name: &'static str,
    pub selected: bool,
}

/// One cart line with stepper targets.
#[derive(Clone)]
pub struct CartItemView {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub quantity: u32,
    pub line_price: String,
    /// Quantity the minus button asks for. May be 0, which the reducer ignores.
    pub decrement_to: i64,
    pub increment_to: i64,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        let quantity = i64::from(item.quantity);
        Self {
            product_id: item.product.id.to_string(),
            name: item.product.name.clone(),
            description: item.product.description.clone(),
            quantity: item.quantity,
            line_price: item.product.price.times(item.quantity).to_string(),
            decrement_to: quantity - 1,
            increment_to: quantity + 1,
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub delivery_fee: String,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&SessionState> for CartView {
    fn from(state: &SessionState) -> Self {
        Self {
            items: state.cart.items().iter().map(CartItemView::from).collect(),
            subtotal: state.cart_subtotal().to_string(),
            delivery_fee: state.delivery_fee().to_string(),
            total: state.order_total().to_string(),
            item_count: state.cart_item_count(),
        }
    }
}

/// The slide-over cart panel and its three checkout sub-views.
#[derive(Clone)]
pub struct CheckoutView {
    /// 0 = cart, 1 = address, 2 = confirmation.
    pub step: u8,
    pub title: &'static str,
    pub cart: CartView,
    pub address: DeliveryAddress,
    pub asap: bool,
    /// Shown next to the ASAP option.
    pub vendor_delivery_time: String,
}

impl CheckoutView {
    #[must_use]
    pub fn build(state: &SessionState) -> Self {
        let step: CheckoutStep = state.checkout_step;
        Self {
            step: step.index(),
            title: step.title(),
            cart: CartView::from(state),
            address: state.address.clone(),
            asap: state.delivery_window == DeliveryWindow::Asap,
            vendor_delivery_time: state
                .selected_vendor
                .as_ref()
                .map(|vendor| vendor.delivery_time.clone())
                .unwrap_or_default(),
        }
    }
}

/// Everything the storefront page renders.
#[derive(Clone)]
pub struct PageView {
    pub search_query: String,
    pub categories: Vec<CategoryOptionView>,
    /// Filtered vendor grid; only rendered when no vendor is selected.
    pub vendors: Vec<VendorCardView>,
    pub selected_vendor: Option<VendorCardView>,
    /// Product grid; only rendered when a vendor is selected.
    pub products: Vec<ProductCardView>,
    /// Header badge; hidden for an empty cart.
    pub cart_badge: Option<u32>,
    pub cart_open: bool,
    pub checkout: CheckoutView,
}

impl PageView {
    #[must_use]
    pub fn build(state: &SessionState, catalog: &Catalog) -> Self {
        let categories = CategoryFilter::options()
            .into_iter()
            .map(|option| CategoryOptionView {
                name: option.as_str(),
                selected: option == state.category_filter,
            })
            .collect();

        let (vendors, products) = if state.selected_vendor.is_some() {
            (
                Vec::new(),
                catalog.products().iter().map(ProductCardView::from).collect(),
            )
        } else {
            (
                state
                    .filtered_vendors(catalog)
                    .into_iter()
                    .map(VendorCardView::from)
                    .collect(),
                Vec::new(),
            )
        };

        Self {
            search_query: state.search_query.clone(),
            categories,
            vendors,
            selected_vendor: state.selected_vendor.as_ref().map(VendorCardView::from),
            products,
            cart_badge: (!state.cart.is_empty()).then(|| state.cart_item_count()),
            cart_open: state.cart_open,
            checkout: CheckoutView::build(state),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use sixam_core::{ProductId, VendorId};

    use super::*;
    use crate::session::{Action, reduce};

    #[test]
    fn test_vendor_list_page() {
        let catalog = Catalog::mock().unwrap();
        let page = PageView::build(&SessionState::default(), &catalog);

        assert_eq!(page.vendors.len(), 6);
        assert!(page.products.is_empty());
        assert!(page.cart_badge.is_none());
        assert_eq!(page.categories.len(), 7);
        assert!(page.categories[0].selected);
        assert_eq!(page.vendors[0].delivery_fee, "$2.99");
        assert_eq!(page.vendors[0].rating, "4.7");
    }

    #[test]
    fn test_vendor_page_shows_all_products() {
        let catalog = Catalog::mock().unwrap();
        let vendor = catalog.vendor(&VendorId::new("5")).unwrap().clone();
        let state = reduce(SessionState::default(), Action::SelectVendor(Some(vendor)));
        let page = PageView::build(&state, &catalog);

        assert!(page.vendors.is_empty());
        assert_eq!(page.products.len(), 6);
        assert_eq!(page.selected_vendor.unwrap().name, "Meat Masters");
        assert_eq!(page.checkout.vendor_delivery_time, "35-45 min");
    }

    #[test]
    fn test_cart_lines_and_badge() {
        let catalog = Catalog::mock().unwrap();
        let apples = catalog.product(&ProductId::new("p1")).unwrap().clone();
        let state = [
            Action::AddToCart(apples.clone()),
            Action::AddToCart(apples),
            Action::OpenCart,
        ]
        .into_iter()
        .fold(SessionState::default(), reduce);
        let page = PageView::build(&state, &catalog);

        assert_eq!(page.cart_badge, Some(2));
        let line = &page.checkout.cart.items[0];
        assert_eq!(line.line_price, "$7.98");
        assert_eq!(line.decrement_to, 1);
        assert_eq!(line.increment_to, 3);
        assert_eq!(page.checkout.title, "Your Cart");
        assert_eq!(page.checkout.cart.total, "$7.98");
    }
}
