//! The storefront state machine: `(state, action) -> state`.
//!
//! [`reduce`] is total. It never fails, performs no I/O and reads no clock,
//! so every transition can be tested without a server.
//!
//! Invariants maintained here:
//! - cart quantities are always >= 1
//! - changing the selected vendor empties the cart
//! - closing the cart panel resets the checkout step to `Cart`

use sixam_core::CheckoutStep;

use super::action::Action;
use super::state::SessionState;

/// Apply one user interaction to the session state.
#[must_use]
pub fn reduce(mut state: SessionState, action: Action) -> SessionState {
    match action {
        Action::SelectVendor(vendor) => {
            let current = state.selected_vendor.as_ref().map(|v| &v.id);
            if current != vendor.as_ref().map(|v| &v.id) {
                state.cart.clear();
                state.selected_vendor = vendor;
            }
        }
        Action::SetSearchQuery(query) => state.search_query = query,
        Action::SetCategoryFilter(filter) => state.category_filter = filter,
        Action::AddToCart(product) => state.cart.add_one(product),
        Action::RemoveFromCart(product_id) => state.cart.remove(&product_id),
        Action::SetQuantity {
            product_id,
            quantity,
        } => {
            // Below 1 is rejected outright; removal is its own action.
            if let Ok(quantity) = u32::try_from(quantity)
                && quantity >= 1
            {
                state.cart.set_quantity(&product_id, quantity);
            }
        }
        Action::OpenCart => state.cart_open = true,
        Action::CloseCart => {
            state.cart_open = false;
            state.checkout_step = CheckoutStep::Cart;
        }
        Action::AdvanceCheckout => {
            let blocked = !state.cart_open
                || state.checkout_step.is_terminal()
                || (state.checkout_step == CheckoutStep::Cart && state.cart.is_empty());
            if !blocked {
                state.checkout_step = state.checkout_step.next();
            }
        }
        Action::SetAddress(patch) => state.address.apply(patch),
        Action::SetDeliveryWindow(window) => state.delivery_window = window,
    }
    state
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use sixam_core::{AddressPatch, CategoryFilter, DeliveryWindow, ProductId, VendorCategory, VendorId};

    use super::*;
    use crate::catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::mock().unwrap()
    }

    fn run(actions: impl IntoIterator<Item = Action>) -> SessionState {
        actions
            .into_iter()
            .fold(SessionState::default(), reduce)
    }

    fn add(catalog: &Catalog, id: &str) -> Action {
        Action::AddToCart(catalog.product(&ProductId::new(id)).unwrap().clone())
    }

    fn select(catalog: &Catalog, id: &str) -> Action {
        Action::SelectVendor(Some(catalog.vendor(&VendorId::new(id)).unwrap().clone()))
    }

    fn open_checkout(catalog: &Catalog) -> SessionState {
        run([select(catalog, "1"), add(catalog, "p1"), Action::OpenCart])
    }

    #[test]
    fn test_add_same_product_counts_calls() {
        let catalog = catalog();
        for n in 1..=5 {
            let state = run((0..n).map(|_| add(&catalog, "p3")));
            assert_eq!(state.cart.len(), 1);
            assert_eq!(state.cart.items()[0].quantity, n);
        }
    }

    #[test]
    fn test_add_appends_new_products_in_order() {
        let catalog = catalog();
        let state = run([add(&catalog, "p2"), add(&catalog, "p1"), add(&catalog, "p2")]);
        let ids: Vec<&str> = state.cart.items().iter().map(|i| i.id().as_str()).collect();
        assert_eq!(ids, ["p2", "p1"]);
        assert_eq!(state.cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_set_quantity_below_one_is_ignored() {
        let catalog = catalog();
        let base = run([add(&catalog, "p1"), add(&catalog, "p1")]);
        for quantity in [0, -1, i64::MIN] {
            let state = reduce(
                base.clone(),
                Action::SetQuantity {
                    product_id: ProductId::new("p1"),
                    quantity,
                },
            );
            assert_eq!(state.cart.items()[0].quantity, 2);
        }
    }

    #[test]
    fn test_set_quantity_replaces_value() {
        let catalog = catalog();
        let state = run([
            add(&catalog, "p1"),
            Action::SetQuantity {
                product_id: ProductId::new("p1"),
                quantity: 7,
            },
        ]);
        assert_eq!(state.cart.items()[0].quantity, 7);
    }

    #[test]
    fn test_set_quantity_overflow_and_unknown_are_ignored() {
        let catalog = catalog();
        let state = run([
            add(&catalog, "p1"),
            Action::SetQuantity {
                product_id: ProductId::new("p1"),
                quantity: i64::from(u32::MAX) + 1,
            },
            Action::SetQuantity {
                product_id: ProductId::new("nope"),
                quantity: 3,
            },
        ]);
        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_remove_then_add_resets_quantity() {
        let catalog = catalog();
        let state = run([
            add(&catalog, "p5"),
            add(&catalog, "p5"),
            add(&catalog, "p5"),
            Action::RemoveFromCart(ProductId::new("p5")),
            add(&catalog, "p5"),
        ]);
        assert_eq!(state.cart.get(&ProductId::new("p5")).unwrap().quantity, 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let catalog = catalog();
        let before = run([add(&catalog, "p1")]);
        let after = reduce(before.clone(), Action::RemoveFromCart(ProductId::new("p9")));
        assert_eq!(before, after);
    }

    #[test]
    fn test_selecting_new_vendor_empties_cart() {
        let catalog = catalog();
        let state = run([
            select(&catalog, "1"),
            add(&catalog, "p1"),
            add(&catalog, "p2"),
            select(&catalog, "4"),
        ]);
        assert!(state.cart.is_empty());
        assert_eq!(state.selected_vendor.unwrap().name, "Bakery Delight");
    }

    #[test]
    fn test_back_to_vendor_list_empties_cart() {
        let catalog = catalog();
        let state = run([
            select(&catalog, "2"),
            add(&catalog, "p4"),
            Action::SelectVendor(None),
        ]);
        assert!(state.selected_vendor.is_none());
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_reselecting_same_vendor_keeps_cart() {
        let catalog = catalog();
        let state = run([select(&catalog, "3"), add(&catalog, "p1"), select(&catalog, "3")]);
        assert_eq!(state.cart.len(), 1);
    }

    #[test]
    fn test_close_cart_resets_step_mid_checkout() {
        let catalog = catalog();
        let state = reduce(open_checkout(&catalog), Action::AdvanceCheckout);
        assert_eq!(state.checkout_step, CheckoutStep::Address);

        let state = reduce(state, Action::CloseCart);
        assert!(!state.cart_open);
        assert_eq!(state.checkout_step, CheckoutStep::Cart);
        assert_eq!(state.cart.len(), 1);
    }

    #[test]
    fn test_checkout_is_forward_only_and_terminal() {
        let catalog = catalog();
        let state = [
            Action::AdvanceCheckout,
            Action::AdvanceCheckout,
            Action::AdvanceCheckout,
        ]
        .into_iter()
        .fold(open_checkout(&catalog), reduce);
        assert_eq!(state.checkout_step, CheckoutStep::Confirmation);
    }

    #[test]
    fn test_advance_requires_open_panel_and_items() {
        let catalog = catalog();
        let closed = run([add(&catalog, "p1"), Action::AdvanceCheckout]);
        assert_eq!(closed.checkout_step, CheckoutStep::Cart);

        let empty = run([Action::OpenCart, Action::AdvanceCheckout]);
        assert_eq!(empty.checkout_step, CheckoutStep::Cart);
    }

    #[test]
    fn test_search_and_category_setters() {
        let state = run([
            Action::SetSearchQuery("fresh".to_owned()),
            Action::SetCategoryFilter(CategoryFilter::Only(VendorCategory::Grocery)),
        ]);
        assert_eq!(state.search_query, "fresh");
        assert_eq!(
            state.category_filter,
            CategoryFilter::Only(VendorCategory::Grocery)
        );
    }

    #[test]
    fn test_address_and_delivery_window() {
        let state = run([
            Action::SetAddress(AddressPatch {
                street: Some("1 Elm St".to_owned()),
                ..AddressPatch::default()
            }),
            Action::SetAddress(AddressPatch {
                zip: Some("10001".to_owned()),
                ..AddressPatch::default()
            }),
            Action::SetDeliveryWindow(DeliveryWindow::Later),
        ]);
        assert_eq!(state.address.street, "1 Elm St");
        assert_eq!(state.address.zip, "10001");
        assert_eq!(state.delivery_window, DeliveryWindow::Later);
    }
}
