//! Storefront page and vendor-list filters.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use sixam_core::CategoryFilter;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::session::{self, Action};
use crate::state::AppState;
use crate::views::PageView;

/// Storefront page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub page: PageView,
}

/// Search form data.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub q: String,
}

/// Category filter form data.
#[derive(Debug, Deserialize)]
pub struct CategoryForm {
    pub category: String,
}

/// Render the storefront from the current session state.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> Result<IndexTemplate> {
    let current = session::load(&session).await?;
    Ok(IndexTemplate {
        page: PageView::build(&current, state.catalog()),
    })
}

/// Set the vendor search query.
#[instrument(skip(session))]
pub async fn search(session: Session, Form(form): Form<SearchForm>) -> Result<Redirect> {
    session::dispatch(&session, [Action::SetSearchQuery(form.q)]).await?;
    Ok(super::back_to_storefront())
}

/// Set the vendor category filter.
#[instrument(skip(session))]
pub async fn category(session: Session, Form(form): Form<CategoryForm>) -> Result<Redirect> {
    let filter: CategoryFilter = form
        .category
        .parse()
        .map_err(|e: sixam_core::CategoryError| AppError::BadRequest(e.to_string()))?;
    session::dispatch(&session, [Action::SetCategoryFilter(filter)]).await?;
    Ok(super::back_to_storefront())
}
