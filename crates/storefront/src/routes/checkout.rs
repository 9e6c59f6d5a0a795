//! Checkout route handlers.
//!
//! Checkout is forward-only: cart, then address, then confirmation. Nothing
//! is submitted; the confirmation step only renders the order summary.

use axum::{Form, response::Redirect};
use serde::Deserialize;
use sixam_core::{AddressPatch, DeliveryWindow};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::session::{self, Action};

/// Delivery information form data. Missing fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct AddressForm {
    pub street: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub notes: Option<String>,
    pub delivery_window: Option<DeliveryWindow>,
    /// Present when the shopper pressed "Place Order" rather than "Save".
    pub advance: Option<String>,
}

impl AddressForm {
    /// Actions this submission stands for, in order.
    fn into_actions(self) -> Vec<Action> {
        let patch = AddressPatch {
            street: self.street,
            city: self.city,
            zip: self.zip,
            notes: self.notes,
        };

        let mut actions = Vec::with_capacity(3);
        if !patch.is_empty() {
            actions.push(Action::SetAddress(patch));
        }
        if let Some(window) = self.delivery_window {
            actions.push(Action::SetDeliveryWindow(window));
        }
        if self.advance.is_some() {
            actions.push(Action::AdvanceCheckout);
        }
        actions
    }
}

/// Move to the next checkout step.
#[instrument(skip(session))]
pub async fn advance(session: Session) -> Result<Redirect> {
    let state = session::dispatch(&session, [Action::AdvanceCheckout]).await?;
    tracing::info!(step = state.checkout_step.index(), "checkout advanced");
    Ok(super::back_to_storefront())
}

/// Save the address draft, optionally advancing to confirmation.
#[instrument(skip(session))]
pub async fn address(session: Session, Form(form): Form<AddressForm>) -> Result<Redirect> {
    session::dispatch(&session, form.into_actions()).await?;
    Ok(super::back_to_storefront())
}
