//! Polygon service — use-cases for managing polygons and running containment checks.

use geostore_domain::containment::Containment;
use geostore_domain::coordinate::Coordinate;
use geostore_domain::error::{GeoStoreError, NotFoundError};
use geostore_domain::id::PolygonId;
use geostore_domain::polygon::{NewPolygon, Polygon, PolygonUpdate};

use crate::ports::PolygonRepository;

/// Application service for polygon operations.
pub struct PolygonService<R> {
    repo: R,
}

impl<R: PolygonRepository> PolygonService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all polygons.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_polygons(&self) -> Result<Vec<Polygon>, GeoStoreError> {
        self.repo.get_all().await
    }

    /// Store a batch of polygons, all or nothing.
    ///
    /// # Errors
    ///
    /// Returns [`GeoStoreError::Validation`] for the first invalid polygon, or
    /// a storage error from the repository (including WKT the store rejects).
    #[tracing::instrument(skip(self, polygons), fields(count = polygons.len()))]
    pub async fn create_polygons(
        &self,
        polygons: Vec<NewPolygon>,
    ) -> Result<Vec<PolygonId>, GeoStoreError> {
        for polygon in &polygons {
            polygon.validate()?;
        }
        if polygons.is_empty() {
            return Ok(Vec::new());
        }
        let ids = self.repo.create_all(polygons).await?;
        tracing::info!(count = ids.len(), "polygons created");
        Ok(ids)
    }

    /// Replace the name and area of an existing polygon.
    ///
    /// # Errors
    ///
    /// Returns [`GeoStoreError::Validation`] if invariants fail,
    /// [`GeoStoreError::NotFound`] when no polygon has the id, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self, update), fields(id = %update.id))]
    pub async fn update_polygon(&self, update: PolygonUpdate) -> Result<(), GeoStoreError> {
        update.polygon.validate()?;
        let id = update.id;
        if self.repo.update(update).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    /// Check whether `coordinate` lies within polygon `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GeoStoreError::NotFound`] when no polygon has the id, never
    /// a silent [`Containment::Outside`].
    #[tracing::instrument(skip(self))]
    pub async fn check_containment(
        &self,
        id: PolygonId,
        coordinate: Coordinate,
    ) -> Result<Containment, GeoStoreError> {
        self.repo
            .contains(id, coordinate)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: PolygonId) -> GeoStoreError {
    NotFoundError {
        entity: "Polygon",
        id: id.to_string(),
    }
    .into()
}
