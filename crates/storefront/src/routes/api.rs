//! JSON view of the shopper's session.

use axum::{Json, extract::State};
use serde::Serialize;
use sixam_core::{Price, VendorId};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::session::{self, SessionState};
use crate::state::AppState;

/// Session state plus every derived value, as the page would compute them.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub cart_subtotal: Price,
    pub delivery_fee: Price,
    pub order_total: Price,
    pub cart_item_count: u32,
    pub filtered_vendor_ids: Vec<VendorId>,
}

impl SessionSnapshot {
    #[must_use]
    pub fn build(state: SessionState, catalog: &crate::catalog::Catalog) -> Self {
        let filtered_vendor_ids = state
            .filtered_vendors(catalog)
            .into_iter()
            .map(|vendor| vendor.id.clone())
            .collect();
        Self {
            cart_subtotal: state.cart_subtotal(),
            delivery_fee: state.delivery_fee(),
            order_total: state.order_total(),
            cart_item_count: state.cart_item_count(),
            filtered_vendor_ids,
            state,
        }
    }
}

/// Current session snapshot.
#[instrument(skip(state, session))]
pub async fn session_snapshot(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<SessionSnapshot>> {
    let current = session::load(&session).await?;
    Ok(Json(SessionSnapshot::build(current, state.catalog())))
}
