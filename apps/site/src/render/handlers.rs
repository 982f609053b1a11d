//! Axum route handlers for the page itself.

use axum::{extract::State, response::Html, response::Redirect};
use chrono::{Datelike, Utc};

use crate::render::html::to_document;
use crate::render::{build_page, ContactView, PageContext};
use crate::state::AppState;

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state, ContactView::default()).await)
}

/// GET /home
///
/// Legacy entry point; carries no content of its own.
pub async fn handle_home_redirect() -> Redirect {
    Redirect::to("/")
}

/// Renders the full page with the given contact form state.
/// The store read guard is held only while the tree is built.
pub async fn render_page(state: &AppState, contact: ContactView) -> String {
    let config = &state.config;
    let ctx = PageContext {
        app_name: &config.app_name,
        owner: &config.owner,
        year: Utc::now().year(),
        contact,
    };

    let page = {
        let store = state.store.read().await;
        build_page(&store, &ctx)
    };

    to_document(&page.into())
}
