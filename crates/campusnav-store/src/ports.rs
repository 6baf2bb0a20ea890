use campusnav_core::models::{Building, Photo, Route};

/// Port for read-only access to the reference tables.
///
/// Slices are returned in table order; lookups that depend on "first match"
/// semantics rely on that order.
pub trait ReferenceTables {
    /// All buildings, in table order
    fn buildings(&self) -> &[Building];

    /// All precomputed routes, in table order
    fn routes(&self) -> &[Route];

    /// All geotagged photographs, in table order
    fn photos(&self) -> &[Photo];
}
