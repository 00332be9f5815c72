//! # geostore-domain
//!
//! Pure domain model for the geostore spatial entity service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Points** (named coordinates) and **Polygons** (named WKT areas)
//! - Define the **Containment** outcome of a point-in-polygon check
//! - Enforce payload invariants through builders (required fields, non-empty names)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod containment;
pub mod coordinate;
pub mod point;
pub mod polygon;
