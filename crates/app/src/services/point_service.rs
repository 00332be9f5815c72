//! Point service — use-cases for managing points.

use geostore_domain::error::{GeoStoreError, NotFoundError};
use geostore_domain::id::PointId;
use geostore_domain::point::{NewPoint, Point, PointUpdate};

use crate::ports::PointRepository;

/// Application service for point operations.
pub struct PointService<R> {
    repo: R,
}

impl<R: PointRepository> PointService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all points.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_points(&self) -> Result<Vec<Point>, GeoStoreError> {
        self.repo.get_all().await
    }

    /// Store a batch of points, all or nothing.
    ///
    /// Every point is validated before the repository is touched, so an
    /// invalid item means no statement is issued at all.
    ///
    /// # Errors
    ///
    /// Returns [`GeoStoreError::Validation`] for the first invalid point, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, points), fields(count = points.len()))]
    pub async fn create_points(&self, points: Vec<NewPoint>) -> Result<Vec<PointId>, GeoStoreError> {
        for point in &points {
            point.validate()?;
        }
        if points.is_empty() {
            return Ok(Vec::new());
        }
        let ids = self.repo.create_all(points).await?;
        tracing::info!(count = ids.len(), "points created");
        Ok(ids)
    }

    /// Replace the name and location of an existing point.
    ///
    /// # Errors
    ///
    /// Returns [`GeoStoreError::Validation`] if invariants fail,
    /// [`GeoStoreError::NotFound`] when no point has the id, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self, update), fields(id = %update.id))]
    pub async fn update_point(&self, update: PointUpdate) -> Result<(), GeoStoreError> {
        update.point.validate()?;
        let id = update.id;
        if self.repo.update(update).await? {
            Ok(())
        } else {
            Err(NotFoundError {
                entity: "Point",
                id: id.to_string(),
            }
            .into())
        }
    }
}
