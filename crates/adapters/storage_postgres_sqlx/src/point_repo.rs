//! `PostgreSQL` implementation of [`PointRepository`].

use std::future::Future;

use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use geostore_app::ports::PointRepository;
use geostore_domain::coordinate::SRID;
use geostore_domain::error::GeoStoreError;
use geostore_domain::id::PointId;
use geostore_domain::point::{NewPoint, Point, PointUpdate};

use crate::error::StorageError;
use crate::pool::Database;

/// Wrapper for converting database rows into domain [`Point`].
struct Wrapper(Point);

impl<'r> FromRow<'r, PgRow> for Wrapper {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let location: String = row.try_get("location")?;

        Ok(Self(Point {
            id: PointId::new(id),
            name,
            location,
        }))
    }
}

const SELECT_ALL: &str = "SELECT id, name, ST_AsText(location) AS location FROM points ORDER BY id";
const INSERT: &str = "INSERT INTO points (name, location) \
     VALUES ($1, ST_SetSRID(ST_MakePoint($2, $3), $4)::geography) RETURNING id";
const UPDATE: &str = "UPDATE points \
     SET name = $1, location = ST_SetSRID(ST_MakePoint($2, $3), $4)::geography \
     WHERE id = $5";

/// `PostgreSQL`-backed point repository.
pub struct PostgresPointRepository {
    db: Database,
}

impl PostgresPointRepository {
    /// Create a new repository using the given database handle.
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl PointRepository for PostgresPointRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Point>, GeoStoreError>> + Send {
        let db = self.db.clone();
        async move {
            let mut conn = db.acquire().await?;
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&mut *conn)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn create_all(
        &self,
        points: Vec<NewPoint>,
    ) -> impl Future<Output = Result<Vec<PointId>, GeoStoreError>> + Send {
        let db = self.db.clone();
        async move {
            let mut tx = db.begin().await?;
            let mut ids = Vec::with_capacity(points.len());
            for point in points {
                // ST_MakePoint takes x (longitude) before y (latitude).
                let id: i64 = sqlx::query_scalar(INSERT)
                    .bind(point.name)
                    .bind(point.coordinate.longitude)
                    .bind(point.coordinate.latitude)
                    .bind(SRID)
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(StorageError::from)?;
                ids.push(PointId::new(id));
            }
            tx.commit().await.map_err(StorageError::from)?;

            Ok(ids)
        }
    }

    fn update(&self, update: PointUpdate) -> impl Future<Output = Result<bool, GeoStoreError>> + Send {
        let db = self.db.clone();
        async move {
            let mut conn = db.acquire().await?;
            let result = sqlx::query(UPDATE)
                .bind(update.point.name)
                .bind(update.point.coordinate.longitude)
                .bind(update.point.coordinate.latitude)
                .bind(SRID)
                .bind(update.id.as_i64())
                .execute(&mut *conn)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
