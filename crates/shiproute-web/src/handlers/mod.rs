//! HTTP handlers for all web routes.

pub mod analysis;
pub mod api;
pub mod dashboard;
pub mod system;
