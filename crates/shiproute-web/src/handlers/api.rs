//! JSON API over the route catalog and map artifacts.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use shiproute_catalog::{map, MapArtifact};
use shiproute_common::Route;

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct RouteList {
    pub routes: Vec<String>,
}

pub async fn api_routes(State(state): State<SharedState>) -> Json<RouteList> {
    Json(RouteList {
        routes: state.catalog.list_route_names().into_iter().map(str::to_string).collect(),
    })
}

pub async fn api_route_detail(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Json<Route>, ApiError> {
    Ok(Json(state.catalog.get_route(&name)?.clone()))
}

pub async fn api_route_map(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Json<MapArtifact>, ApiError> {
    Ok(Json(map::render(state.catalog.get_route(&name)?)))
}

/// Map for whatever the dashboard currently shows.
pub async fn api_current_map(State(state): State<SharedState>) -> Json<MapArtifact> {
    let snapshot = state.snapshot().await;
    Json(snapshot.map(&state.catalog))
}
