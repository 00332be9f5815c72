//! JSON handler for the point-in-polygon check.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use geostore_app::ports::{PointRepository, PolygonRepository};
use geostore_domain::containment::Containment;
use geostore_domain::coordinate::Coordinate;
use geostore_domain::error::ValidationError;
use geostore_domain::id::PolygonId;

use crate::api::payload;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for a containment check.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub polygon_id: Option<PolygonId>,
}

impl CheckRequest {
    fn into_parts(self) -> Result<(PolygonId, Coordinate), ValidationError> {
        let latitude = self
            .latitude
            .ok_or(ValidationError::MissingField("latitude"))?;
        let longitude = self
            .longitude
            .ok_or(ValidationError::MissingField("longitude"))?;
        let polygon_id = self
            .polygon_id
            .ok_or(ValidationError::MissingField("polygon_id"))?;
        Ok((polygon_id, Coordinate::new(latitude, longitude)))
    }
}

/// Response body for a containment check.
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub result: Containment,
}

/// Possible responses from the check endpoint.
pub enum CheckResponse {
    Ok(Json<CheckResult>),
}

impl IntoResponse for CheckResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /check_point_in_polygon`
pub async fn check<PR, AR>(
    State(state): State<AppState<PR, AR>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<CheckResponse, ApiError>
where
    PR: PointRepository + Send + Sync + 'static,
    AR: PolygonRepository + Send + Sync + 'static,
{
    let req = payload::object::<CheckRequest>(payload::body(body)?)?;
    let (polygon_id, coordinate) = req.into_parts()?;

    let result = state
        .polygon_service
        .check_containment(polygon_id, coordinate)
        .await?;
    Ok(CheckResponse::Ok(Json(CheckResult { result })))
}
