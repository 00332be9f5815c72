//! Shared application state for axum handlers.

use std::sync::Arc;

use geostore_app::ports::{PointRepository, PolygonRepository};
use geostore_app::services::point_service::PointService;
use geostore_app::services::polygon_service::PolygonService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<PR, AR> {
    /// Point service.
    pub point_service: Arc<PointService<PR>>,
    /// Polygon and containment service.
    pub polygon_service: Arc<PolygonService<AR>>,
}

impl<PR, AR> Clone for AppState<PR, AR> {
    fn clone(&self) -> Self {
        Self {
            point_service: Arc::clone(&self.point_service),
            polygon_service: Arc::clone(&self.polygon_service),
        }
    }
}

impl<PR, AR> AppState<PR, AR>
where
    PR: PointRepository + Send + Sync + 'static,
    AR: PolygonRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(point_service: PointService<PR>, polygon_service: PolygonService<AR>) -> Self {
        Self {
            point_service: Arc::new(point_service),
            polygon_service: Arc::new(polygon_service),
        }
    }
}
