//! Analysis buttons: templated and free-text.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use crate::analysis::{run_custom, run_templated};
use crate::error::ApiError;
use crate::handlers::dashboard::render_current;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct CustomQueryForm {
    #[serde(default)]
    pub query: String,
}

pub async fn templated_analysis(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    run_templated(&state).await;
    render_current(&state).await
}

pub async fn custom_analysis(
    State(state): State<SharedState>,
    Form(form): Form<CustomQueryForm>,
) -> Result<Html<String>, ApiError> {
    run_custom(&state, &form.query).await;
    render_current(&state).await
}
