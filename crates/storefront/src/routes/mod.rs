//! HTTP route handlers for storefront.
//!
//! Every POST reduces one user interaction into the session state and
//! redirects back to `/` (303), so a refresh never replays an action.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Storefront page (vendor grid or product grid, cart panel)
//! GET  /health                 - Health check
//!
//! # Browse
//! POST /search                 - Set search query
//! POST /category               - Set category filter
//! POST /vendors/{id}/select    - Open a vendor (empties the cart)
//! POST /vendors/deselect       - Back to the vendor list (empties the cart)
//!
//! # Cart
//! POST /cart/open              - Show the cart panel
//! POST /cart/close             - Hide the cart panel (resets checkout)
//! POST /cart/add               - Add one unit of a product
//! POST /cart/update            - Set a line's quantity (values < 1 ignored)
//! POST /cart/remove            - Remove a line
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! POST /checkout/advance       - Next checkout step
//! POST /checkout/address       - Update the address draft (optionally advance)
//!
//! # API
//! GET  /api/session            - JSON snapshot of state and derived totals
//! ```

pub mod api;
pub mod cart;
pub mod checkout;
pub mod home;
pub mod vendors;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Where every state-changing POST lands.
pub(crate) fn back_to_storefront() -> Redirect {
    Redirect::to("/")
}

/// Create the vendor routes router.
pub fn vendor_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}/select", post(vendors::select))
        .route("/deselect", post(vendors::deselect))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/open", post(cart::open))
        .route("/close", post(cart::close))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/advance", post(checkout::advance))
        .route("/address", post(checkout::address))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/search", post(home::search))
        .route("/category", post(home::category))
        .nest("/vendors", vendor_routes())
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
        .route("/api/session", get(api::session_snapshot))
}
