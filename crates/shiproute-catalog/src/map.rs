//! Map artifacts for the browser map widget.
//!
//! The renderer does no projection or fitting of its own. It lists markers
//! and polylines in a fixed style around a fixed centre; the widget in the
//! page draws exactly what is listed, in order.

use serde::Serialize;
use shiproute_common::Route;

use crate::catalog::RouteCatalog;

/// Fixed map centre `[lat, lon]`, over maritime Southeast Asia.
pub const MAP_CENTER: [f64; 2] = [0.0, 100.0];
pub const MAP_ZOOM: u8 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolylineStyle {
    pub color: &'static str,
    pub weight: f32,
    pub opacity: f32,
}

/// Route line style, identical for every route.
pub const ROUTE_STYLE: PolylineStyle = PolylineStyle {
    color: "blue",
    weight: 2.5,
    opacity: 0.8,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: [f64; 2],
    pub label: Option<String>,
    pub route: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    pub points: Vec<[f64; 2]>,
    pub tooltip: String,
    pub style: PolylineStyle,
}

/// Everything the page needs to draw one map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapArtifact {
    pub center: [f64; 2],
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub polylines: Vec<Polyline>,
}

impl MapArtifact {
    fn blank() -> Self {
        Self {
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
            markers: Vec::new(),
            polylines: Vec::new(),
        }
    }

    /// JSON for embedding in the page.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// One marker per waypoint and one polyline through all of them.
pub fn render(route: &Route) -> MapArtifact {
    let markers = route
        .waypoints
        .iter()
        .map(|w| {
            let tooltip = match &w.label {
                Some(port) => format!("{} ({})", port, route.name),
                None => route.name.clone(),
            };
            Marker {
                position: w.lat_lon(),
                label: w.label.clone(),
                route: route.name.clone(),
                tooltip,
            }
        })
        .collect();

    MapArtifact {
        markers,
        polylines: vec![route_line(route)],
        ..MapArtifact::blank()
    }
}

/// Default-centred map with nothing drawn, for when no route is selected.
pub fn render_empty() -> MapArtifact {
    MapArtifact::blank()
}

/// Every catalog route as a bare polyline, no markers.
pub fn render_overview(catalog: &RouteCatalog) -> MapArtifact {
    MapArtifact {
        polylines: catalog.routes().map(route_line).collect(),
        ..MapArtifact::blank()
    }
}

fn route_line(route: &Route) -> Polyline {
    Polyline {
        points: route.waypoints.iter().map(|w| w.lat_lon()).collect(),
        tooltip: route.name.clone(),
        style: ROUTE_STYLE,
    }
}
