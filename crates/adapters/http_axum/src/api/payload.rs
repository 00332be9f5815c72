//! Request body parsing and shared response bodies.
//!
//! Bodies are taken as raw JSON first so that malformed JSON, a missing
//! content type and a wrong top-level shape all surface as the same
//! validation error (400) instead of axum's default rejections.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use geostore_domain::error::ValidationError;

/// A creation payload: one object or an array of objects.
#[derive(Debug)]
pub enum Batch<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Batch<T> {
    /// Whether the client sent an array.
    pub fn is_many(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }
}

/// Unwrap the JSON extractor, folding any rejection into
/// [`ValidationError::InvalidFormat`].
pub fn body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, ValidationError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected request body");
            Err(ValidationError::InvalidFormat)
        }
    }
}

/// Parse a body that must be a single JSON object.
pub fn object<T: DeserializeOwned>(value: Value) -> Result<T, ValidationError> {
    if !value.is_object() {
        return Err(ValidationError::InvalidFormat);
    }
    serde_json::from_value(value).map_err(|err| ValidationError::InvalidPayload(err.to_string()))
}

/// Parse a body that may be an object or an array of objects.
pub fn batch<T: DeserializeOwned>(value: Value) -> Result<Batch<T>, ValidationError> {
    match value {
        Value::Object(_) => object(value).map(Batch::One),
        Value::Array(items) => items
            .into_iter()
            .map(object)
            .collect::<Result<Vec<T>, _>>()
            .map(Batch::Many),
        _ => Err(ValidationError::InvalidFormat),
    }
}

/// Confirmation body for creation endpoints.
#[derive(Debug, Serialize)]
pub struct Created<I> {
    pub message: &'static str,
    pub ids: Vec<I>,
}

/// Confirmation body for update endpoints.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}
