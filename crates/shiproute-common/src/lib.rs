//! shiproute-common — Shared route types and errors used across all shiproute crates.

pub mod error;
pub mod route;

// Re-export commonly used types
pub use error::CatalogError;
pub use route::{Route, Waypoint};
