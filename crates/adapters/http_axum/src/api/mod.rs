//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod containment;
#[allow(clippy::missing_errors_doc)]
pub mod payload;
#[allow(clippy::missing_errors_doc)]
pub mod points;
#[allow(clippy::missing_errors_doc)]
pub mod polygons;

use axum::Router;
use axum::routing::{get, post};

use geostore_app::ports::{PointRepository, PolygonRepository};

use crate::state::AppState;

/// Build the resource sub-router.
pub fn routes<PR, AR>() -> Router<AppState<PR, AR>>
where
    PR: PointRepository + Send + Sync + 'static,
    AR: PolygonRepository + Send + Sync + 'static,
{
    Router::new()
        // Points
        .route(
            "/points",
            get(points::list::<PR, AR>)
                .post(points::create::<PR, AR>)
                .put(points::update::<PR, AR>),
        )
        // Polygons
        .route(
            "/polygons",
            get(polygons::list::<PR, AR>)
                .post(polygons::create::<PR, AR>)
                .put(polygons::update::<PR, AR>),
        )
        // Containment
        .route(
            "/check_point_in_polygon",
            post(containment::check::<PR, AR>),
        )
}
