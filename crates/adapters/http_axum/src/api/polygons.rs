//! JSON handlers for polygons.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::Value;

use geostore_app::ports::{PointRepository, PolygonRepository};
use geostore_domain::id::PolygonId;
use geostore_domain::polygon::{NewPolygon, Polygon, PolygonBuilder};

use crate::api::payload::{self, Created, Message};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or updating a polygon.
#[derive(Debug, Deserialize)]
pub struct PolygonRequest {
    pub id: Option<PolygonId>,
    pub name: Option<String>,
    pub polygon_wkt: Option<String>,
}

impl PolygonRequest {
    fn into_builder(self) -> PolygonBuilder {
        NewPolygon::builder()
            .id(self.id)
            .name(self.name)
            .wkt(self.polygon_wkt)
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Polygon>>),
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
    Created(Json<Created<PolygonId>>),
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

/// `GET /polygons`
pub async fn list<PR, AR>(
    State(state): State<AppState<PR, AR>>,
) -> Result<ListResponse, ApiError>
where
    PR: PointRepository + Send + Sync + 'static,
    AR: PolygonRepository + Send + Sync + 'static,
{
    let polygons = state.polygon_service.list_polygons().await?;
    Ok(ListResponse::Ok(Json(polygons)))
}

/// `POST /polygons`
pub async fn create<PR, AR>(
    State(state): State<AppState<PR, AR>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    PR: PointRepository + Send + Sync + 'static,
    AR: PolygonRepository + Send + Sync + 'static,
{
    let batch = payload::batch::<PolygonRequest>(payload::body(body)?)?;
    let message = if batch.is_many() {
        "Polygons added successfully"
    } else {
        "Polygon added successfully"
    };

    let polygons = batch
        .into_vec()
        .into_iter()
        .map(|req| req.into_builder().build())
        .collect::<Result<Vec<_>, _>>()?;

    let ids = state.polygon_service.create_polygons(polygons).await?;
    Ok(CreateResponse::Created(Json(Created { message, ids })))
}

/// `PUT /polygons`
pub async fn update<PR, AR>(
    State(state): State<AppState<PR, AR>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    PR: PointRepository + Send + Sync + 'static,
    AR: PolygonRepository + Send + Sync + 'static,
{
    let req = payload::object::<PolygonRequest>(payload::body(body)?)?;
    let update = req.into_builder().build_update()?;

    state.polygon_service.update_polygon(update).await?;
    Ok(UpdateResponse::Ok(Json(Message {
        message: "Polygon updated successfully",
    })))
}
