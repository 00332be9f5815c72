//! Polygon — a named geographic area described by well-known text.

use serde::{Deserialize, Serialize};

use crate::error::{GeoStoreError, ValidationError};
use crate::id::PolygonId;

/// A stored polygon as read back from the store.
///
/// `area` is the store's textual rendering of the geography.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polygon {
    pub id: PolygonId,
    pub name: String,
    pub area: String,
}

/// A polygon that has not been stored yet.
///
/// `wkt` is handed to the store's geography parser untouched; ring closure,
/// winding and self-intersection are not checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPolygon {
    pub name: String,
    pub wkt: String,
}

impl NewPolygon {
    /// Create a builder for constructing a [`NewPolygon`] or a [`PolygonUpdate`].
    #[must_use]
    pub fn builder() -> PolygonBuilder {
        PolygonBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GeoStoreError::Validation`] when `name` or `wkt` is empty.
    pub fn validate(&self) -> Result<(), GeoStoreError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.wkt.is_empty() {
            return Err(ValidationError::EmptyWkt.into());
        }
        Ok(())
    }
}

/// Full replacement of an existing polygon's name and area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolygonUpdate {
    pub id: PolygonId,
    pub polygon: NewPolygon,
}

/// Step-by-step builder for [`NewPolygon`] and [`PolygonUpdate`].
#[derive(Debug, Default)]
pub struct PolygonBuilder {
    id: Option<PolygonId>,
    name: Option<String>,
    wkt: Option<String>,
}

impl PolygonBuilder {
    #[must_use]
    pub fn id(mut self, id: Option<PolygonId>) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    #[must_use]
    pub fn wkt(mut self, wkt: Option<String>) -> Self {
        self.wkt = wkt;
        self
    }

    /// Consume the builder, validate, and return a [`NewPolygon`].
    ///
    /// # Errors
    ///
    /// Returns [`GeoStoreError::Validation`] if `name` or `polygon_wkt` is
    /// missing or empty.
    pub fn build(self) -> Result<NewPolygon, GeoStoreError> {
        let polygon = NewPolygon {
            name: self.name.ok_or(ValidationError::MissingField("name"))?,
            wkt: self.wkt.ok_or(ValidationError::MissingField("polygon_wkt"))?,
        };
        polygon.validate()?;
        Ok(polygon)
    }

    /// Consume the builder and return a [`PolygonUpdate`].
    ///
    /// # Errors
    ///
    /// Returns [`GeoStoreError::Validation`] if `id` is missing or if
    /// [`PolygonBuilder::build`] would fail.
    pub fn build_update(mut self) -> Result<PolygonUpdate, GeoStoreError> {
        let id = self.id.take().ok_or(ValidationError::MissingField("id"))?;
        Ok(PolygonUpdate {
            id,
            polygon: self.build()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = "POLYGON((0 0,0 10,10 10,10 0,0 0))";

    fn complete() -> PolygonBuilder {
        NewPolygon::builder()
            .name(Some("Square".to_string()))
            .wkt(Some(SQUARE.to_string()))
    }

    #[test]
    fn should_build_polygon_when_all_fields_present() {
        let polygon = complete().build().unwrap();
        assert_eq!(polygon.name, "Square");
        assert_eq!(polygon.wkt, SQUARE);
    }

    #[test]
    fn should_pass_wkt_through_uninterpreted() {
        let polygon = complete()
            .wkt(Some("POLYGON((0 0,1 1))".to_string()))
            .build()
            .unwrap();
        assert_eq!(polygon.wkt, "POLYGON((0 0,1 1))");
    }

    #[test]
    fn should_return_missing_field_when_wkt_absent() {
        let result = complete().wkt(None).build();
        assert!(matches!(
            result,
            Err(GeoStoreError::Validation(ValidationError::MissingField(
                "polygon_wkt"
            )))
        ));
    }

    #[test]
    fn should_return_empty_wkt_when_wkt_blank() {
        let result = complete().wkt(Some(String::new())).build();
        assert!(matches!(
            result,
            Err(GeoStoreError::Validation(ValidationError::EmptyWkt))
        ));
    }

    #[test]
    fn should_return_empty_name_when_name_blank() {
        let result = complete().name(Some(String::new())).build();
        assert!(matches!(
            result,
            Err(GeoStoreError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_build_update_when_id_present() {
        let update = complete()
            .id(Some(PolygonId::new(2)))
            .build_update()
            .unwrap();
        assert_eq!(update.id, PolygonId::new(2));
        assert_eq!(update.polygon.wkt, SQUARE);
    }

    #[test]
    fn should_require_id_for_update() {
        let result = complete().build_update();
        assert!(matches!(
            result,
            Err(GeoStoreError::Validation(ValidationError::MissingField("id")))
        ));
    }
}
