//! # geostore-adapter-storage-postgres-sqlx
//!
//! `PostgreSQL` + `PostGIS` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `geostore-app::ports::storage`
//! - Provision connections: a lazily connecting pool with scoped acquisition
//! - Run database migrations (using sqlx embedded migrations)
//! - Build geographies and evaluate containment inside the store
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `geostore-app` (for port traits) and `geostore-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod point_repo;
mod polygon_repo;
mod pool;

pub use error::StorageError;
pub use point_repo::PostgresPointRepository;
pub use polygon_repo::PostgresPolygonRepository;
pub use pool::{Config, Database};
