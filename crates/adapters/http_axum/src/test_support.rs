//! In-memory repositories and request helpers for handler tests.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use geostore_app::ports::{PointRepository, PolygonRepository};
use geostore_app::services::point_service::PointService;
use geostore_app::services::polygon_service::PolygonService;
use geostore_domain::containment::Containment;
use geostore_domain::coordinate::Coordinate;
use geostore_domain::error::GeoStoreError;
use geostore_domain::id::{PointId, PolygonId};
use geostore_domain::point::{NewPoint, Point, PointUpdate};
use geostore_domain::polygon::{NewPolygon, Polygon, PolygonUpdate};

use crate::router;
use crate::state::AppState;

fn unavailable() -> GeoStoreError {
    GeoStoreError::Unavailable(Box::new(std::io::Error::from(
        std::io::ErrorKind::ConnectionRefused,
    )))
}

fn render(coordinate: Coordinate) -> String {
    format!("POINT({} {})", coordinate.longitude, coordinate.latitude)
}

#[derive(Default)]
pub struct InMemoryPoints {
    store: Mutex<BTreeMap<PointId, Point>>,
    unavailable: bool,
}

impl PointRepository for InMemoryPoints {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Point>, GeoStoreError>> + Send {
        let result = if self.unavailable {
            Err(unavailable())
        } else {
            Ok(self.store.lock().unwrap().values().cloned().collect())
        };
        async { result }
    }

    fn create_all(
        &self,
        points: Vec<NewPoint>,
    ) -> impl Future<Output = Result<Vec<PointId>, GeoStoreError>> + Send {
        let result = if self.unavailable {
            Err(unavailable())
        } else {
            let mut store = self.store.lock().unwrap();
            let mut ids = Vec::with_capacity(points.len());
            for point in points {
                let id = PointId::new(i64::try_from(store.len()).unwrap() + 1);
                store.insert(
                    id,
                    Point {
                        id,
                        name: point.name,
                        location: render(point.coordinate),
                    },
                );
                ids.push(id);
            }
            Ok(ids)
        };
        async { result }
    }

    fn update(&self, update: PointUpdate) -> impl Future<Output = Result<bool, GeoStoreError>> + Send {
        let result = if self.unavailable {
            Err(unavailable())
        } else {
            let mut store = self.store.lock().unwrap();
            Ok(store.get_mut(&update.id).is_some_and(|point| {
                point.name = update.point.name;
                point.location = render(update.point.coordinate);
                true
            }))
        };
        async { result }
    }
}

/// Polygons are stored by id; containment treats every stored area as the
/// square spanning 0..=10 on both axes.
#[derive(Default)]
pub struct InMemoryPolygons {
    store: Mutex<BTreeMap<PolygonId, Polygon>>,
    unavailable: bool,
}

impl PolygonRepository for InMemoryPolygons {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Polygon>, GeoStoreError>> + Send {
        let result = if self.unavailable {
            Err(unavailable())
        } else {
            Ok(self.store.lock().unwrap().values().cloned().collect())
        };
        async { result }
    }

    fn create_all(
        &self,
        polygons: Vec<NewPolygon>,
    ) -> impl Future<Output = Result<Vec<PolygonId>, GeoStoreError>> + Send {
        let result = if self.unavailable {
            Err(unavailable())
        } else {
            let mut store = self.store.lock().unwrap();
            let mut ids = Vec::with_capacity(polygons.len());
            for polygon in polygons {
                let id = PolygonId::new(i64::try_from(store.len()).unwrap() + 1);
                store.insert(
                    id,
                    Polygon {
                        id,
                        name: polygon.name,
                        area: polygon.wkt,
                    },
                );
                ids.push(id);
            }
            Ok(ids)
        };
        async { result }
    }

    fn update(
        &self,
        update: PolygonUpdate,
    ) -> impl Future<Output = Result<bool, GeoStoreError>> + Send {
        let result = if self.unavailable {
            Err(unavailable())
        } else {
            let mut store = self.store.lock().unwrap();
            Ok(store.get_mut(&update.id).is_some_and(|polygon| {
                polygon.name = update.polygon.name;
                polygon.area = update.polygon.wkt;
                true
            }))
        };
        async { result }
    }

    fn contains(
        &self,
        id: PolygonId,
        coordinate: Coordinate,
    ) -> impl Future<Output = Result<Option<Containment>, GeoStoreError>> + Send {
        let within = |v: f64| (0.0..=10.0).contains(&v);
        let result = if self.unavailable {
            Err(unavailable())
        } else {
            Ok(self.store.lock().unwrap().get(&id).map(|_| {
                Containment::from_covers(within(coordinate.latitude) && within(coordinate.longitude))
            }))
        };
        async { result }
    }
}

/// Fully wired router over shared in-memory repositories.
#[derive(Default)]
pub struct TestApp {
    points: Arc<InMemoryPoints>,
    polygons: Arc<InMemoryPolygons>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every repository call fails as if no connection could be acquired.
    pub fn unavailable() -> Self {
        Self {
            points: Arc::new(InMemoryPoints {
                unavailable: true,
                ..InMemoryPoints::default()
            }),
            polygons: Arc::new(InMemoryPolygons {
                unavailable: true,
                ..InMemoryPolygons::default()
            }),
        }
    }

    pub fn router(&self) -> Router {
        router::build(AppState::new(
            PointService::new(Arc::clone(&self.points)),
            PolygonService::new(Arc::clone(&self.polygons)),
        ))
    }

    pub fn point_count(&self) -> usize {
        self.points.store.lock().unwrap().len()
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons.store.lock().unwrap().len()
    }
}

/// Send a request and return the raw response.
pub async fn raw(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Send a request and decode the response body as JSON.
///
/// Non-JSON bodies come back as a JSON string, empty bodies as `null`.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    decode(raw(app, method, uri, body).await).await
}

/// Send a request with a verbatim body labelled as JSON.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    decode(app.oneshot(request).await.unwrap()).await
}

async fn decode(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}
