//! Coordinates and distances shared across all campusnav crates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CampusError, Result};

/// WGS 84 latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// GeoJSON position order (`[lon, lat]`)
    pub fn to_position(&self) -> Vec<f64> {
        vec![self.lon, self.lat]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lon)
    }
}

/// A straight line between two coordinates, as drawn on the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Coordinate,
    pub to: Coordinate,
}

impl Segment {
    pub fn new(from: Coordinate, to: Coordinate) -> Self {
        Self { from, to }
    }

    /// The same segment traversed the other way
    pub fn reversed(&self) -> Self {
        Self { from: self.to, to: self.from }
    }
}

/// Distance units for spatial operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DistanceUnit {
    #[default]
    Meters,
    Kilometers,
    Miles,
    Feet,
}

impl DistanceUnit {
    /// Convert a distance value to meters
    pub fn to_meters(&self, value: f64) -> f64 {
        match self {
            DistanceUnit::Meters => value,
            DistanceUnit::Kilometers => value * 1000.0,
            DistanceUnit::Miles => value * 1609.34,
            DistanceUnit::Feet => value * 0.3048,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            DistanceUnit::Meters => "m",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::Feet => "ft",
        }
    }
}

/// Distance with unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub value: f64,
    pub unit: DistanceUnit,
}

impl Distance {
    pub fn new(value: f64, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }

    pub fn meters(value: f64) -> Self {
        Self::new(value, DistanceUnit::Meters)
    }

    pub fn kilometers(value: f64) -> Self {
        Self::new(value, DistanceUnit::Kilometers)
    }

    /// Convert to meters
    pub fn to_meters(&self) -> f64 {
        self.unit.to_meters(self.value)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

/// Parse a distance such as `50`, `50m`, `0.05km` or `150 ft`.
///
/// A bare number is interpreted in meters.
pub fn parse_distance(s: &str) -> Result<Distance> {
    let s = s.trim();

    let value_end = s.trim_end_matches(|c: char| c.is_alphabetic()).len();
    let (value_str, unit_str) = (s[..value_end].trim(), &s[value_end..]);

    let value: f64 = value_str.parse().map_err(|_| CampusError::ConfigInvalid {
        key: "distance".to_string(),
        reason: format!("Invalid distance value: '{}'", s),
    })?;

    if !value.is_finite() || value < 0.0 {
        return Err(CampusError::ConfigInvalid {
            key: "distance".to_string(),
            reason: format!("Distance must be a non-negative number: '{}'", s),
        });
    }

    let unit = match unit_str.to_lowercase().as_str() {
        "" | "m" | "meter" | "meters" => DistanceUnit::Meters,
        "km" | "kilometer" | "kilometers" => DistanceUnit::Kilometers,
        "mi" | "mile" | "miles" => DistanceUnit::Miles,
        "ft" | "foot" | "feet" => DistanceUnit::Feet,
        other => {
            return Err(CampusError::ConfigInvalid {
                key: "distance".to_string(),
                reason: format!("Invalid distance unit: {}. Use m, km, mi, or ft", other),
            })
        }
    };

    Ok(Distance::new(value, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_conversion() {
        let km = Distance::kilometers(0.05);
        assert!((km.to_meters() - 50.0).abs() < 1e-9);

        let mi = Distance::new(1.0, DistanceUnit::Miles);
        assert!((mi.to_meters() - 1609.34).abs() < 1e-9);
    }

    #[test]
    fn test_parse_distance() {
        assert_eq!(parse_distance("50").unwrap(), Distance::meters(50.0));
        assert_eq!(parse_distance("50m").unwrap(), Distance::meters(50.0));
        assert_eq!(parse_distance(" 0.05 km ").unwrap(), Distance::kilometers(0.05));
        assert_eq!(parse_distance("150ft").unwrap().unit, DistanceUnit::Feet);
        assert!(parse_distance("fifty").is_err());
        assert!(parse_distance("10 parsecs").is_err());
        assert!(parse_distance("-5m").is_err());
    }

    #[test]
    fn test_parse_distance_exponent() {
        assert_eq!(parse_distance("1e3").unwrap(), Distance::meters(1000.0));
        assert_eq!(parse_distance("5e1m").unwrap(), Distance::meters(50.0));
        assert_eq!(parse_distance("2.5E-1 km").unwrap(), Distance::kilometers(0.25));
        assert!(parse_distance("1e").is_err());
        assert!(parse_distance("inf").is_err());
    }

    #[test]
    fn test_segment_reversed() {
        let a = Coordinate::new(21.50, 39.24);
        let b = Coordinate::new(21.51, 39.25);
        let seg = Segment::new(a, b);
        assert_eq!(seg.reversed(), Segment::new(b, a));
        assert_eq!(seg.reversed().reversed(), seg);
    }

    #[test]
    fn test_coordinate_position_order() {
        let c = Coordinate::new(21.4932, 39.2465);
        assert_eq!(c.to_position(), vec![39.2465, 21.4932]);
        assert!(c.is_finite());
        assert!(!Coordinate::new(f64::NAN, 39.0).is_finite());
    }
}
