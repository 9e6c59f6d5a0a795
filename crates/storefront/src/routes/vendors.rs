//! Vendor selection.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use sixam_core::VendorId;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::session::{self, Action};
use crate::state::AppState;

/// Open a vendor's product grid. Switching vendors empties the cart.
#[instrument(skip(state, session))]
pub async fn select(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Redirect> {
    let vendor_id = VendorId::new(id);
    let vendor = state
        .catalog()
        .vendor(&vendor_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("vendor {vendor_id}")))?;

    session::dispatch(&session, [Action::SelectVendor(Some(vendor))]).await?;
    Ok(super::back_to_storefront())
}

/// Return to the vendor list.
#[instrument(skip(session))]
pub async fn deselect(session: Session) -> Result<Redirect> {
    session::dispatch(&session, [Action::SelectVendor(None)]).await?;
    Ok(super::back_to_storefront())
}
