use serde::{Deserialize, Serialize};
use std::fmt;

use super::geometry::Coordinate;

/// Canonical building identifier.
///
/// Source tables use integer ids, but any string is accepted so that
/// hand-edited tables with textual ids still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildingId(pub String);

impl BuildingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BuildingId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for BuildingId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

macro_rules! building_id_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BuildingId {
                fn from(id: $t) -> Self {
                    Self(id.to_string())
                }
            }
        )*
    };
}

building_id_from_int!(i32, i64, u32, u64);

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A campus building as listed in the reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// Unique identifier, referenced by routes
    pub id: BuildingId,

    /// Display name offered in the selectors
    pub name: String,

    /// Marker location
    pub location: Coordinate,
}

impl Building {
    pub fn new(id: impl Into<BuildingId>, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: Coordinate::new(lat, lon),
        }
    }
}
