//! `PostgreSQL` implementation of [`PolygonRepository`].
//!
//! WKT parsing and the containment predicate both run inside `PostGIS`.
//! `ST_Covers` is boundary-inclusive: a coordinate on an edge or vertex of
//! the stored area counts as inside.

use std::future::Future;

use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use geostore_app::ports::PolygonRepository;
use geostore_domain::containment::Containment;
use geostore_domain::coordinate::{Coordinate, SRID};
use geostore_domain::error::GeoStoreError;
use geostore_domain::id::PolygonId;
use geostore_domain::polygon::{NewPolygon, Polygon, PolygonUpdate};

use crate::error::StorageError;
use crate::pool::Database;

/// Wrapper for converting database rows into domain [`Polygon`].
struct Wrapper(Polygon);

impl<'r> FromRow<'r, PgRow> for Wrapper {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let area: String = row.try_get("area")?;

        Ok(Self(Polygon {
            id: PolygonId::new(id),
            name,
            area,
        }))
    }
}

const SELECT_ALL: &str = "SELECT id, name, ST_AsText(area) AS area FROM polygons ORDER BY id";
const INSERT: &str = "INSERT INTO polygons (name, area) \
     VALUES ($1, ST_GeogFromText($2)) RETURNING id";
const UPDATE: &str = "UPDATE polygons SET name = $1, area = ST_GeogFromText($2) WHERE id = $3";
const COVERS: &str = "SELECT ST_Covers(area, ST_SetSRID(ST_MakePoint($1, $2), $3)::geography) \
     FROM polygons WHERE id = $4";

/// Prefix raw WKT with the spatial reference so `ST_GeogFromText` reads it
/// as EWKT.
fn ewkt(wkt: &str) -> String {
    format!("SRID={SRID};{wkt}")
}

/// `PostgreSQL`-backed polygon repository.
pub struct PostgresPolygonRepository {
    db: Database,
}

impl PostgresPolygonRepository {
    /// Create a new repository using the given database handle.
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl PolygonRepository for PostgresPolygonRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Polygon>, GeoStoreError>> + Send {
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
        polygons: Vec<NewPolygon>,
    ) -> impl Future<Output = Result<Vec<PolygonId>, GeoStoreError>> + Send {
        let db = self.db.clone();
        async move {
            let mut tx = db.begin().await?;
            let mut ids = Vec::with_capacity(polygons.len());
            for polygon in polygons {
                let id: i64 = sqlx::query_scalar(INSERT)
                    .bind(polygon.name)
                    .bind(ewkt(&polygon.wkt))
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(StorageError::from)?;
                ids.push(PolygonId::new(id));
            }
            tx.commit().await.map_err(StorageError::from)?;

            Ok(ids)
        }
    }

    fn update(
        &self,
        update: PolygonUpdate,
    ) -> impl Future<Output = Result<bool, GeoStoreError>> + Send {
        let db = self.db.clone();
        async move {
            let mut conn = db.acquire().await?;
            let result = sqlx::query(UPDATE)
                .bind(update.polygon.name)
                .bind(ewkt(&update.polygon.wkt))
                .bind(update.id.as_i64())
                .execute(&mut *conn)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn contains(
        &self,
        id: PolygonId,
        coordinate: Coordinate,
    ) -> impl Future<Output = Result<Option<Containment>, GeoStoreError>> + Send {
        let db = self.db.clone();
        async move {
            let mut conn = db.acquire().await?;
            let covers: Option<bool> = sqlx::query_scalar(COVERS)
                .bind(coordinate.longitude)
                .bind(coordinate.latitude)
                .bind(SRID)
                .bind(id.as_i64())
                .fetch_optional(&mut *conn)
                .await
                .map_err(StorageError::from)?;

            Ok(covers.map(Containment::from_covers))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    const SQUARE: &str = "POLYGON((0 0,0 10,10 10,10 0,0 0))";

    async fn setup() -> PostgresPolygonRepository {
        let url = std::env::var("GEOSTORE_TEST_DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/spatial_data_test".to_string());
        let db = Config::new(url).build().unwrap();
        db.migrate().await.unwrap();
        PostgresPolygonRepository::new(db)
    }

    fn polygon(name: &str, wkt: &str) -> NewPolygon {
        NewPolygon {
            name: name.to_string(),
            wkt: wkt.to_string(),
        }
    }

    async fn names(repo: &PostgresPolygonRepository) -> Vec<String> {
        repo.get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect()
    }

    #[tokio::test]
    #[ignore = "requires a PostGIS database"]
    async fn should_store_polygon_and_render_area() {
        let repo = setup().await;

        let ids = repo
            .create_all(vec![polygon("repo-square", SQUARE)])
            .await
            .unwrap();

        let stored = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .find(|p| p.id == ids[0])
            .unwrap();
        assert_eq!(stored.name, "repo-square");
        assert!(stored.area.starts_with("POLYGON(("));
    }

    #[tokio::test]
    #[ignore = "requires a PostGIS database"]
    async fn should_roll_back_whole_batch_when_store_rejects_one_item() {
        let repo = setup().await;

        let result = repo
            .create_all(vec![
                polygon("repo-rollback-good", SQUARE),
                polygon("repo-rollback-bad", "NOT WKT"),
            ])
            .await;

        assert!(matches!(result, Err(GeoStoreError::Storage(_))));
        let stored = names(&repo).await;
        assert!(!stored.iter().any(|n| n.starts_with("repo-rollback")));
    }

    #[test]
    fn should_prefix_wkt_with_srid() {
        assert_eq!(
            ewkt(SQUARE),
            "SRID=4326;POLYGON((0 0,0 10,10 10,10 0,0 0))"
        );
    }

    #[tokio::test]
    #[ignore = "requires a PostGIS database"]
    async fn should_reject_wkt_that_is_not_a_polygon() {
        let repo = setup().await;

        let result = repo
            .create_all(vec![polygon("repo-not-a-polygon", "POINT(1 1)")])
            .await;

        assert!(matches!(result, Err(GeoStoreError::Storage(_))));
        let stored = names(&repo).await;
        assert!(!stored.iter().any(|n| n == "repo-not-a-polygon"));
    }

    #[tokio::test]
    #[ignore = "requires a PostGIS database"]
    async fn should_report_inside_for_interior_point() {
        let repo = setup().await;
        let ids = repo
            .create_all(vec![polygon("repo-inside", SQUARE)])
            .await
            .unwrap();

        let result = repo
            .contains(ids[0], Coordinate::new(5.0, 5.0))
            .await
            .unwrap();

        assert_eq!(result, Some(Containment::Inside));
    }

    #[tokio::test]
    #[ignore = "requires a PostGIS database"]
    async fn should_report_outside_for_distant_point() {
        let repo = setup().await;
        let ids = repo
            .create_all(vec![polygon("repo-outside", SQUARE)])
            .await
            .unwrap();

        let result = repo
            .contains(ids[0], Coordinate::new(45.0, 45.0))
            .await
            .unwrap();

        assert_eq!(result, Some(Containment::Outside));
    }

    #[tokio::test]
    #[ignore = "requires a PostGIS database"]
    async fn should_count_vertex_as_inside() {
        let repo = setup().await;
        let ids = repo
            .create_all(vec![polygon("repo-vertex", SQUARE)])
            .await
            .unwrap();

        let result = repo
            .contains(ids[0], Coordinate::new(0.0, 0.0))
            .await
            .unwrap();

        assert_eq!(result, Some(Containment::Inside));
    }

    #[tokio::test]
    #[ignore = "requires a PostGIS database"]
    async fn should_return_none_for_unknown_polygon() {
        let repo = setup().await;

        let result = repo
            .contains(PolygonId::new(i64::MAX), Coordinate::new(5.0, 5.0))
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    #[ignore = "requires a PostGIS database"]
    async fn should_update_polygon_when_exists() {
        let repo = setup().await;
        let ids = repo
            .create_all(vec![polygon("repo-update-before", SQUARE)])
            .await
            .unwrap();

        let matched = repo
            .update(PolygonUpdate {
                id: ids[0],
                polygon: polygon("repo-update-after", SQUARE),
            })
            .await
            .unwrap();

        assert!(matched);
        assert!(names(&repo).await.contains(&"repo-update-after".to_string()));
    }
}
