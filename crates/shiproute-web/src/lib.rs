//! shiproute-web — Web dashboard for shipping route analysis.
//! Provides:
//!   - Route selector and Leaflet map of the selected lane
//!   - Templated and free-text narrative analysis via the LLM bridge
//!   - JSON API for the route catalog and map artifacts

pub mod analysis;
pub mod error;
pub mod handlers;
pub mod render;
pub mod router;
pub mod state;
