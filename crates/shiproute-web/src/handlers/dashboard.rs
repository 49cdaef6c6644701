//! Dashboard page and the route selector.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::{AppState, SharedState};

#[derive(Debug, Deserialize)]
pub struct SelectForm {
    #[serde(default)]
    pub route: String,
}

pub async fn dashboard(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    render_current(&state).await
}

pub async fn select_route(
    State(state): State<SharedState>,
    Form(form): Form<SelectForm>,
) -> Result<Html<String>, ApiError> {
    {
        let mut dashboard = state.dashboard.lock().await;
        match dashboard.select(&state.catalog, &form.route) {
            Ok(()) => info!(route = %form.route, "Route selected"),
            Err(e) => {
                warn!(route = %form.route, "Unknown route selected");
                dashboard.warn(e.to_string());
            }
        }
    }
    render_current(&state).await
}

/// Render the page from a snapshot of the current dashboard state.
pub async fn render_current(state: &AppState) -> Result<Html<String>, ApiError> {
    let snapshot = state.snapshot().await;
    let html = state.pages.dashboard(&state.catalog, &snapshot, &state.model_label)?;
    Ok(Html(html))
}
