//! JSON handlers for points.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::Value;

use geostore_app::ports::{PointRepository, PolygonRepository};
use geostore_domain::id::PointId;
use geostore_domain::point::{NewPoint, Point, PointBuilder};

use crate::api::payload::{self, Created, Message};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or updating a point.
///
/// Every field is optional here; presence is enforced by [`PointBuilder`].
#[derive(Debug, Deserialize)]
pub struct PointRequest {
    pub id: Option<PointId>,
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PointRequest {
    fn into_builder(self) -> PointBuilder {
        NewPoint::builder()
            .id(self.id)
            .name(self.name)
            .latitude(self.latitude)
            .longitude(self.longitude)
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Point>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Created<PointId>>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Message>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /points`
pub async fn list<PR, AR>(
    State(state): State<AppState<PR, AR>>,
) -> Result<ListResponse, ApiError>
where
    PR: PointRepository + Send + Sync + 'static,
    AR: PolygonRepository + Send + Sync + 'static,
{
    let points = state.point_service.list_points().await?;
    Ok(ListResponse::Ok(Json(points)))
}

/// `POST /points`
pub async fn create<PR, AR>(
    State(state): State<AppState<PR, AR>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    PR: PointRepository + Send + Sync + 'static,
    AR: PolygonRepository + Send + Sync + 'static,
{
    let batch = payload::batch::<PointRequest>(payload::body(body)?)?;
    let message = if batch.is_many() {
        "Points added successfully"
    } else {
        "Point added successfully"
    };

    let points = batch
        .into_vec()
        .into_iter()
        .map(|req| req.into_builder().build())
        .collect::<Result<Vec<_>, _>>()?;

    let ids = state.point_service.create_points(points).await?;
    Ok(CreateResponse::Created(Json(Created { message, ids })))
}

/// `PUT /points`
pub async fn update<PR, AR>(
    State(state): State<AppState<PR, AR>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    PR: PointRepository + Send + Sync + 'static,
    AR: PolygonRepository + Send + Sync + 'static,
{
    let req = payload::object::<PointRequest>(payload::body(body)?)?;
    let update = req.into_builder().build_update()?;

    state.point_service.update_point(update).await?;
    Ok(UpdateResponse::Ok(Json(Message {
        message: "Point updated successfully",
    })))
}
