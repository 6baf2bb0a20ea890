//! Selection of photographs near a displayed route.
//!
//! A photo qualifies when it lies strictly closer than the threshold to either
//! route endpoint. Results are ordered by photo id, which follows capture order
//! along the route, never by distance or table position.

use campusnav_core::models::{Coordinate, Distance, Photo};
use campusnav_geo::within_distance_of_any;
use std::cmp::Ordering;

/// Default inclusion radius around each endpoint, in meters
pub const DEFAULT_THRESHOLD_M: f64 = 50.0;

/// Photos within `threshold_m` meters of `endpoint_a` or `endpoint_b`, sorted by id.
///
/// A negative or NaN threshold selects nothing.
pub fn filter_nearby<'a>(
    photos: &'a [Photo],
    endpoint_a: Coordinate,
    endpoint_b: Coordinate,
    threshold_m: f64,
) -> Vec<&'a Photo> {
    if threshold_m.is_nan() || threshold_m < 0.0 {
        return Vec::new();
    }

    let endpoints = [endpoint_a, endpoint_b];
    let mut selected: Vec<&Photo> = photos
        .iter()
        .filter(|photo| within_distance_of_any(photo.location, &endpoints, threshold_m))
        .collect();

    selected.sort_by(|a, b| photo_order(a, b));

    tracing::debug!(
        candidates = photos.len(),
        selected = selected.len(),
        threshold_m,
        "Filtered photos near route"
    );

    selected
}

/// Id first; the remaining keys only separate rows that share an id
fn photo_order(a: &Photo, b: &Photo) -> Ordering {
    a.id.cmp(&b.id)
        .then_with(|| a.file_ref.cmp(&b.file_ref))
        .then_with(|| a.location.lat.total_cmp(&b.location.lat))
        .then_with(|| a.location.lon.total_cmp(&b.location.lon))
}

/// Proximity filter bound to a configured threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityFilter {
    threshold: Distance,
}

impl Default for ProximityFilter {
    fn default() -> Self {
        Self::new(Distance::meters(DEFAULT_THRESHOLD_M))
    }
}

impl ProximityFilter {
    pub fn new(threshold: Distance) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> Distance {
        self.threshold
    }

    pub fn threshold_meters(&self) -> f64 {
        self.threshold.to_meters()
    }

    /// Apply the filter to a route's endpoints
    pub fn apply<'a>(&self, photos: &'a [Photo], from: Coordinate, to: Coordinate) -> Vec<&'a Photo> {
        filter_nearby(photos, from, to, self.threshold_meters())
    }
}
