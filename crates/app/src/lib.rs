//! # geostore-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PointRepository` — list, batch insert, full update of points
//!   - `PolygonRepository` — the same for polygons, plus the containment query
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PointService` — list, create (single or batch), update
//!   - `PolygonService` — list, create (single or batch), update, containment check
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `geostore-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
