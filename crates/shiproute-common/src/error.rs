use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Route not found: {0}")]
    NotFound(String),

    #[error("Duplicate route name: {0}")]
    DuplicateRoute(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
