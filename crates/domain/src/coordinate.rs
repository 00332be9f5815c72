//! Geographic coordinate pair under SRID 4326.

use serde::{Deserialize, Serialize};

/// Spatial reference system used for every stored geography (WGS84).
pub const SRID: i32 = 4326;

/// A latitude/longitude pair in degrees.
///
/// No range check is applied: the store decides what it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
