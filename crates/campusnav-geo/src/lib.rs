//! Campus Navigator Geo - Distance computations on WGS 84 coordinates
//!
//! Bridges the core [`Coordinate`](campusnav_core::models::Coordinate) type to
//! the `geo` crate and exposes the proximity predicates used by the photo filter.

pub mod models;
pub mod spatial;

pub use models::to_point;
pub use spatial::{geodesic_distance, within_distance, within_distance_of_any};
