//! Analysis actions: turn a button press into at most one assistant call.
//!
//! The dashboard lock is held only to read the request and to write the
//! outcome, never across the outbound call.

use tracing::{info, warn};

use shiproute_llm::prompt::SYSTEM_ROLE;
use shiproute_llm::AnalysisRequest;

use crate::state::{AppState, Selection};

pub const EMPTY_QUERY_WARNING: &str = "Silakan masukkan pertanyaan terlebih dahulu.";

/// Templated analysis of the selected route, or of every route when none is selected.
pub async fn run_templated(state: &AppState) {
    let request = {
        let dashboard = state.dashboard.lock().await;
        match &dashboard.selection {
            Selection::Route(name) => AnalysisRequest::Route(name.clone()),
            Selection::None | Selection::Overview => AnalysisRequest::Overview(
                state.catalog.list_route_names().into_iter().map(str::to_string).collect(),
            ),
        }
    };
    run(state, request).await;
}

/// Free-text analysis. Blank input produces a warning and no outbound call.
pub async fn run_custom(state: &AppState, query: &str) {
    {
        let mut dashboard = state.dashboard.lock().await;
        dashboard.last_query = Some(query.to_string());
        if query.trim().is_empty() {
            info!("Custom analysis skipped: empty query");
            dashboard.warn(EMPTY_QUERY_WARNING);
            return;
        }
    }
    run(state, AnalysisRequest::Custom(query.to_string())).await;
}

async fn run(state: &AppState, request: AnalysisRequest) {
    let kind = request.kind();
    info!(request = kind, "Running narrative analysis");

    let result = state.assistant.analyze(&request.prompt_text(), SYSTEM_ROLE).await;

    let mut dashboard = state.dashboard.lock().await;
    match result {
        Ok(text) => dashboard.complete(kind, text),
        Err(e) => {
            warn!(request = kind, error = %e, "Narrative analysis failed");
            dashboard.fail(format!("Error berkomunikasi dengan {}: {}", state.model_label, e));
        }
    }
}
