//! Storage port — repository traits for persistence.
//!
//! Geometry construction and spatial predicates are the store's job: the
//! repositories receive raw coordinates and WKT and hand back the store's
//! textual rendering.

use std::future::Future;
use std::sync::Arc;

use geostore_domain::containment::Containment;
use geostore_domain::coordinate::Coordinate;
use geostore_domain::error::GeoStoreError;
use geostore_domain::id::{PointId, PolygonId};
use geostore_domain::point::{NewPoint, Point, PointUpdate};
use geostore_domain::polygon::{NewPolygon, Polygon, PolygonUpdate};

/// Repository for persisting and querying [`Point`]s.
pub trait PointRepository {
    /// Get every stored point.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Point>, GeoStoreError>> + Send;

    /// Insert all points in a single transaction.
    ///
    /// Either every point is stored or none is. Returns the assigned ids in
    /// input order.
    fn create_all(
        &self,
        points: Vec<NewPoint>,
    ) -> impl Future<Output = Result<Vec<PointId>, GeoStoreError>> + Send;

    /// Rewrite the name and location of an existing point.
    ///
    /// Returns `false` when no row has the given id.
    fn update(&self, update: PointUpdate) -> impl Future<Output = Result<bool, GeoStoreError>> + Send;
}

/// Repository for persisting and querying [`Polygon`]s.
pub trait PolygonRepository {
    /// Get every stored polygon.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Polygon>, GeoStoreError>> + Send;

    /// Insert all polygons in a single transaction.
    ///
    /// Either every polygon is stored or none is. Returns the assigned ids in
    /// input order.
    fn create_all(
        &self,
        polygons: Vec<NewPolygon>,
    ) -> impl Future<Output = Result<Vec<PolygonId>, GeoStoreError>> + Send;

    /// Rewrite the name and area of an existing polygon.
    ///
    /// Returns `false` when no row has the given id.
    fn update(
        &self,
        update: PolygonUpdate,
    ) -> impl Future<Output = Result<bool, GeoStoreError>> + Send;

    /// Evaluate whether `coordinate` lies within the area of polygon `id`.
    ///
    /// Returns `None` when no polygon has the given id.
    fn contains(
        &self,
        id: PolygonId,
        coordinate: Coordinate,
    ) -> impl Future<Output = Result<Option<Containment>, GeoStoreError>> + Send;
}

impl<T: PointRepository + Send + Sync> PointRepository for Arc<T> {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Point>, GeoStoreError>> + Send {
        (**self).get_all()
    }

    fn create_all(
        &self,
        points: Vec<NewPoint>,
    ) -> impl Future<Output = Result<Vec<PointId>, GeoStoreError>> + Send {
        (**self).create_all(points)
    }

    fn update(&self, update: PointUpdate) -> impl Future<Output = Result<bool, GeoStoreError>> + Send {
        (**self).update(update)
    }
}

impl<T: PolygonRepository + Send + Sync> PolygonRepository for Arc<T> {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Polygon>, GeoStoreError>> + Send {
        (**self).get_all()
    }

    fn create_all(
        &self,
        polygons: Vec<NewPolygon>,
    ) -> impl Future<Output = Result<Vec<PolygonId>, GeoStoreError>> + Send {
        (**self).create_all(polygons)
    }

    fn update(
        &self,
        update: PolygonUpdate,
    ) -> impl Future<Output = Result<bool, GeoStoreError>> + Send {
        (**self).update(update)
    }

    fn contains(
        &self,
        id: PolygonId,
        coordinate: Coordinate,
    ) -> impl Future<Output = Result<Option<Containment>, GeoStoreError>> + Send {
        (**self).contains(id, coordinate)
    }
}
