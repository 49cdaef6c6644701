//! shiproute-catalog — the static route table and the map artifacts drawn from it.
//!
//!   catalog  — `RouteCatalog`, the built-in shipping lanes
//!   map      — `MapArtifact`: markers + polylines in a fixed style

pub mod catalog;
pub mod map;

pub use catalog::RouteCatalog;
pub use map::{MapArtifact, Marker, Polyline, PolylineStyle};
