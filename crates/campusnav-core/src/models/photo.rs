use serde::{Deserialize, Serialize};
use std::fmt;

use super::geometry::Coordinate;

/// Photograph identifier, assigned in capture order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoId(pub u64);

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A geotagged street-level photograph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    pub location: Coordinate,

    /// Stored path or filename; only the base name is used to find the file
    pub file_ref: String,
}

impl Photo {
    pub fn new(id: u64, lat: f64, lon: f64, file_ref: impl Into<String>) -> Self {
        Self {
            id: PhotoId(id),
            location: Coordinate::new(lat, lon),
            file_ref: file_ref.into(),
        }
    }
}
