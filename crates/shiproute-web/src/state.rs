//! Shared application state for the web server.
//!
//! Everything here is immutable after startup except `dashboard`, the small
//! state container that user actions update. Pages are rendered from a
//! snapshot of it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;

use shiproute_catalog::{map, MapArtifact, RouteCatalog};
use shiproute_common::CatalogError;
use shiproute_llm::NarrativeAssistant;

use crate::render::Pages;

/// Select-box value for "show every route".
pub const OVERVIEW_CHOICE: &str = "__all__";

/// What the map currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Overview,
    Route(String),
}

impl Selection {
    pub fn route_name(&self) -> Option<&str> {
        match self {
            Selection::Route(name) => Some(name),
            _ => None,
        }
    }

    /// Value used for this selection in the route form.
    pub fn form_value(&self) -> &str {
        match self {
            Selection::None => "",
            Selection::Overview => OVERVIEW_CHOICE,
            Selection::Route(name) => name,
        }
    }
}

/// Result of the most recent user action, shown in the output region.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    #[default]
    Empty,
    Analysis {
        text: String,
        request: &'static str,
        at: DateTime<Utc>,
    },
    Warning { message: String },
    Error { message: String },
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub selection: Selection,
    pub last_query: Option<String>,
    pub outcome: Outcome,
}

impl DashboardState {
    /// Apply a route-form value. Unknown names leave the selection as it was.
    pub fn select(&mut self, catalog: &RouteCatalog, choice: &str) -> Result<(), CatalogError> {
        let choice = choice.trim();
        self.selection = match choice {
            "" => Selection::None,
            OVERVIEW_CHOICE => Selection::Overview,
            name => {
                catalog.get_route(name)?;
                Selection::Route(name.to_string())
            }
        };
        Ok(())
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.outcome = Outcome::Warning { message: message.into() };
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.outcome = Outcome::Error { message: message.into() };
    }

    pub fn complete(&mut self, request: &'static str, text: String) {
        self.outcome = Outcome::Analysis { text, request, at: Utc::now() };
    }

    /// Map for the current selection.
    pub fn map(&self, catalog: &RouteCatalog) -> MapArtifact {
        match &self.selection {
            Selection::None => map::render_empty(),
            Selection::Overview => map::render_overview(catalog),
            // A selected name was validated on the way in.
            Selection::Route(name) => catalog
                .get_route(name)
                .map(map::render)
                .unwrap_or_else(|_| map::render_empty()),
        }
    }
}

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub catalog: RouteCatalog,
    pub assistant: Arc<dyn NarrativeAssistant>,
    pub dashboard: Mutex<DashboardState>,
    /// Model name shown in the page intro.
    pub model_label: String,
    pub pages: Pages,
}

impl AppState {
    pub fn new(
        catalog: RouteCatalog,
        assistant: Arc<dyn NarrativeAssistant>,
        model_label: impl Into<String>,
    ) -> Result<Self, minijinja::Error> {
        Ok(Self {
            catalog,
            assistant,
            dashboard: Mutex::new(DashboardState::default()),
            model_label: model_label.into(),
            pages: Pages::new()?,
        })
    }

    pub async fn snapshot(&self) -> DashboardState {
        self.dashboard.lock().await.clone()
    }
}

pub type SharedState = Arc<AppState>;
