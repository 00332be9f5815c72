//! Point — a named geographic location.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::{GeoStoreError, ValidationError};
use crate::id::PointId;

/// A stored point as read back from the store.
///
/// `location` is the store's textual rendering of the geography
/// (e.g. `POINT(20 10)`, longitude first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: PointId,
    pub name: String,
    pub location: String,
}

/// A point that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPoint {
    pub name: String,
    pub coordinate: Coordinate,
}

impl NewPoint {
    /// Create a builder for constructing a [`NewPoint`] or a [`PointUpdate`].
    #[must_use]
    pub fn builder() -> PointBuilder {
        PointBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GeoStoreError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), GeoStoreError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Full replacement of an existing point's name and location.
#[derive(Debug, Clone, PartialEq)]
pub struct PointUpdate {
    pub id: PointId,
    pub point: NewPoint,
}

/// Step-by-step builder for [`NewPoint`] and [`PointUpdate`].
///
/// Every field is optional until `build` so that absent payload fields
/// surface as [`ValidationError::MissingField`].
#[derive(Debug, Default)]
pub struct PointBuilder {
    id: Option<PointId>,
    name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl PointBuilder {
    #[must_use]
    pub fn id(mut self, id: Option<PointId>) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    #[must_use]
    pub fn latitude(mut self, latitude: Option<f64>) -> Self {
        self.latitude = latitude;
        self
    }

    #[must_use]
    pub fn longitude(mut self, longitude: Option<f64>) -> Self {
        self.longitude = longitude;
        self
    }

    /// Consume the builder, validate, and return a [`NewPoint`].
    ///
    /// # Errors
    ///
    /// Returns [`GeoStoreError::Validation`] if `name`, `latitude` or
    /// `longitude` is missing, or if `name` is empty.
    pub fn build(self) -> Result<NewPoint, GeoStoreError> {
        let name = self.name.ok_or(ValidationError::MissingField("name"))?;
        let latitude = self
            .latitude
            .ok_or(ValidationError::MissingField("latitude"))?;
        let longitude = self
            .longitude
            .ok_or(ValidationError::MissingField("longitude"))?;

        let point = NewPoint {
            name,
            coordinate: Coordinate::new(latitude, longitude),
        };
        point.validate()?;
        Ok(point)
    }

    /// Consume the builder and return a [`PointUpdate`].
    ///
    /// # Errors
    ///
    /// Returns [`GeoStoreError::Validation`] if `id` is missing or if
    /// [`PointBuilder::build`] would fail.
    pub fn build_update(mut self) -> Result<PointUpdate, GeoStoreError> {
        let id = self.id.take().ok_or(ValidationError::MissingField("id"))?;
        Ok(PointUpdate {
            id,
            point: self.build()?,
        })
    }
}
