use serde::{Deserialize, Serialize};

use super::building::BuildingId;
use super::geometry::{Coordinate, Segment};
use crate::error::{CampusError, Result};

/// A precomputed walking route between two buildings.
///
/// Routes are undirected: `(a, b)` and `(b, a)` describe the same path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub from: BuildingId,
    pub to: BuildingId,

    /// Path length in meters
    pub length_m: f64,

    /// Walking time in minutes
    pub travel_time_min: f64,

    /// Endpoint coordinates embedded in the route record, when exported
    #[serde(default)]
    pub from_lat: Option<f64>,
    #[serde(default)]
    pub from_lon: Option<f64>,
    #[serde(default)]
    pub to_lat: Option<f64>,
    #[serde(default)]
    pub to_lon: Option<f64>,
}

impl Route {
    /// Create a route without embedded coordinates
    pub fn new(
        from: impl Into<BuildingId>,
        to: impl Into<BuildingId>,
        length_m: f64,
        travel_time_min: f64,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            length_m,
            travel_time_min,
            from_lat: None,
            from_lon: None,
            to_lat: None,
            to_lon: None,
        }
    }

    /// Attach embedded endpoint coordinates
    pub fn with_segment(mut self, from: Coordinate, to: Coordinate) -> Self {
        self.from_lat = Some(from.lat);
        self.from_lon = Some(from.lon);
        self.to_lat = Some(to.lat);
        self.to_lon = Some(to.lon);
        self
    }

    /// True when the route joins `a` and `b` in either direction
    pub fn connects(&self, a: &BuildingId, b: &BuildingId) -> bool {
        (&self.from == a && &self.to == b) || (&self.from == b && &self.to == a)
    }

    /// The embedded segment, stored direction.
    ///
    /// Fails with [`CampusError::MissingCoordinate`] naming the first absent
    /// or non-finite field.
    pub fn segment(&self) -> Result<Segment> {
        let field = |value: Option<f64>, name: &'static str| match value {
            Some(v) if v.is_finite() => Ok(v),
            _ => Err(CampusError::MissingCoordinate {
                from: self.from.clone(),
                to: self.to.clone(),
                field: name,
            }),
        };

        let from = Coordinate::new(field(self.from_lat, "from_lat")?, field(self.from_lon, "from_lon")?);
        let to = Coordinate::new(field(self.to_lat, "to_lat")?, field(self.to_lon, "to_lon")?);

        Ok(Segment::new(from, to))
    }

    /// Tooltip shown on the drawn route
    pub fn summary(&self) -> String {
        format!("Distance: {:.1} m, Time: {:.1} min", self.length_m, self.travel_time_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connects_is_undirected() {
        let route = Route::new(2, 1, 300.0, 5.0);
        assert!(route.connects(&1.into(), &2.into()));
        assert!(route.connects(&2.into(), &1.into()));
        assert!(!route.connects(&1.into(), &3.into()));
        assert!(!route.connects(&1.into(), &1.into()));
    }

    #[test]
    fn test_segment_requires_all_four_fields() {
        let a = Coordinate::new(21.50, 39.24);
        let b = Coordinate::new(21.51, 39.25);

        let complete = Route::new(1, 2, 300.0, 5.0).with_segment(a, b);
        assert_eq!(complete.segment().unwrap(), Segment::new(a, b));

        let mut partial = complete.clone();
        partial.to_lon = None;
        match partial.segment() {
            Err(CampusError::MissingCoordinate { field, .. }) => assert_eq!(field, "to_lon"),
            other => panic!("expected MissingCoordinate, got {:?}", other),
        }

        let mut nan = complete;
        nan.from_lat = Some(f64::NAN);
        assert!(nan.segment().is_err());

        assert!(Route::new(1, 2, 300.0, 5.0).segment().is_err());
    }

    #[test]
    fn test_summary_format() {
        let route = Route::new(1, 2, 312.345, 4.26);
        assert_eq!(route.summary(), "Distance: 312.3 m, Time: 4.3 min");
    }
}
