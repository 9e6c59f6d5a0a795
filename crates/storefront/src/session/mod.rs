//! Storefront view-state: the session value, the actions that change it,
//! and the reducer that applies them.
//!
//! Handlers never mutate state directly. They build an [`Action`], hand it
//! to [`dispatch`], and render whatever comes back.

pub mod action;
pub mod reducer;
pub mod state;
pub mod totals;

pub use action::Action;
pub use reducer::reduce;
pub use state::{Cart, CartItem, SessionState};

use tower_sessions::Session;

use crate::error::Result;

/// Session keys for storefront data.
pub mod keys {
    /// Key for the serialised [`SessionState`](super::SessionState).
    pub const STOREFRONT_STATE: &str = "storefront_state";
}

/// Read the shopper's state, falling back to a fresh one.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn load(session: &Session) -> Result<SessionState> {
    Ok(session
        .get::<SessionState>(keys::STOREFRONT_STATE)
        .await?
        .unwrap_or_default())
}

/// Persist the shopper's state into the session record.
///
/// # Errors
///
/// Returns an error if the session store cannot be written.
pub async fn store(session: &Session, state: &SessionState) -> Result<()> {
    session.insert(keys::STOREFRONT_STATE, state).await?;
    Ok(())
}

/// Load, reduce each action in order, and store the result.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn dispatch(
    session: &Session,
    actions: impl IntoIterator<Item = Action>,
) -> Result<SessionState> {
    let mut state = load(session).await?;
    for action in actions {
        tracing::debug!(action = action.kind(), "dispatching action");
        let subject = action.subject();
        crate::error::add_breadcrumb(
            "storefront",
            action.kind(),
            subject.as_ref().map(std::slice::from_ref),
        );
        state = reduce(state, action);
    }
    store(session, &state).await?;
    Ok(state)
}
