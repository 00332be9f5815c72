//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`GeoStoreError`]
//! via `From`. The HTTP adapter maps every variant to a status code.

use std::error::Error;

/// Boxed source error carried by the IO-backed variants.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Top-level error returned by every application operation.
#[derive(Debug, thiserror::Error)]
pub enum GeoStoreError {
    /// The request payload broke a domain invariant.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The targeted row does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// No connection to the backing store could be acquired.
    #[error("store unavailable")]
    Unavailable(#[source] BoxError),

    /// Any other failure reported by the backing store.
    #[error("storage error")]
    Storage(#[source] BoxError),
}

/// Payload shape or field-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("name must not be empty")]
    EmptyName,

    #[error("polygon_wkt must not be empty")]
    EmptyWkt,

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Invalid data format")]
    InvalidFormat,
}

/// A lookup by identifier matched no row.
///
/// The id is kept for logging; the rendered message names the entity only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
