//! Cart route handlers.
//!
//! The cart lives in the session state; these handlers only translate form
//! posts into cart actions.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::Redirect,
};
use serde::Deserialize;
use sixam_core::ProductId;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::session::{self, Action};
use crate::state::AppState;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Update cart form data.
///
/// `quantity` is signed so that a stepper going below 1 reaches the reducer
/// (which ignores it) instead of failing form parsing.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Show the cart panel.
#[instrument(skip(session))]
pub async fn open(session: Session) -> Result<Redirect> {
    session::dispatch(&session, [Action::OpenCart]).await?;
    Ok(super::back_to_storefront())
}

/// Hide the cart panel. Any checkout in progress restarts at the cart step.
#[instrument(skip(session))]
pub async fn close(session: Session) -> Result<Redirect> {
    session::dispatch(&session, [Action::CloseCart]).await?;
    Ok(super::back_to_storefront())
}

/// Add one unit of a product.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let product_id = ProductId::new(form.product_id);
    let product = state
        .catalog()
        .product(&product_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    session::dispatch(&session, [Action::AddToCart(product)]).await?;
    Ok(super::back_to_storefront())
}

/// Set a cart line's quantity.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Result<Redirect> {
    session::dispatch(
        &session,
        [Action::SetQuantity {
            product_id: ProductId::new(form.product_id),
            quantity: form.quantity,
        }],
    )
    .await?;
    Ok(super::back_to_storefront())
}

/// Remove a cart line.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Redirect> {
    session::dispatch(
        &session,
        [Action::RemoveFromCart(ProductId::new(form.product_id))],
    )
    .await?;
    Ok(super::back_to_storefront())
}

/// Cart count badge.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<CartCountTemplate> {
    let current = session::load(&session).await?;
    Ok(CartCountTemplate {
        count: current.cart_item_count(),
    })
}
