//! CSV loading for the three reference tables.
//!
//! Column names follow the GIS export the tables come from. Extra columns are
//! ignored; cells that fail to parse as coordinates on a route are treated as
//! missing rather than failing the whole table.
//!
//! Buildings and routes are required and load strictly. The photographs table
//! only feeds the slideshow, so a bad photo row is skipped with a warning and a
//! missing photo file loads as an empty table.

use campusnav_core::error::{CampusError, Result};
use campusnav_core::models::{Building, BuildingId, Coordinate, Photo, PhotoId, Route};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

pub const BUILDINGS_FILE: &str = "Building_Points.csv";
pub const ROUTES_FILE: &str = "All_Solved_Routes.csv";
pub const PHOTOS_FILE: &str = "Mapillary_Images.csv";

/// Locations of the three reference tables
#[derive(Debug, Clone, PartialEq)]
pub struct DataSources {
    pub buildings: PathBuf,
    pub routes: PathBuf,
    pub photos: PathBuf,
}

impl DataSources {
    /// The standard file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            buildings: dir.join(BUILDINGS_FILE),
            routes: dir.join(ROUTES_FILE),
            photos: dir.join(PHOTOS_FILE),
        }
    }

    /// Required tables that do not exist on disk.
    ///
    /// The photographs table is optional and never reported here.
    pub fn missing(&self) -> Vec<&Path> {
        [&self.buildings, &self.routes]
            .into_iter()
            .filter(|p| !p.exists())
            .map(PathBuf::as_path)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct BuildingRecord {
    #[serde(rename = "BuildingAr")]
    name: String,
    #[serde(rename = "ORIG_FID", deserialize_with = "deserialize_building_id")]
    id: BuildingId,
    #[serde(rename = "Shape_Y")]
    lat: f64,
    #[serde(rename = "Shape_X")]
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct RouteRecord {
    #[serde(rename = "FromID", deserialize_with = "deserialize_building_id")]
    from: BuildingId,
    #[serde(rename = "ToID", deserialize_with = "deserialize_building_id")]
    to: BuildingId,
    #[serde(rename = "Length")]
    length: f64,
    #[serde(rename = "TravelTime")]
    travel_time: f64,
    #[serde(rename = "From_Lat", default, deserialize_with = "csv::invalid_option")]
    from_lat: Option<f64>,
    #[serde(rename = "From_Lon", default, deserialize_with = "csv::invalid_option")]
    from_lon: Option<f64>,
    #[serde(rename = "To_Lat", default, deserialize_with = "csv::invalid_option")]
    to_lat: Option<f64>,
    #[serde(rename = "To_Lon", default, deserialize_with = "csv::invalid_option")]
    to_lon: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PhotoRecord {
    #[serde(deserialize_with = "deserialize_photo_id")]
    id: PhotoId,
    lat: f64,
    lon: f64,
    photo_path: String,
}

impl From<BuildingRecord> for Building {
    fn from(record: BuildingRecord) -> Self {
        Building {
            id: record.id,
            name: record.name,
            location: Coordinate::new(record.lat, record.lon),
        }
    }
}

impl From<RouteRecord> for Route {
    fn from(record: RouteRecord) -> Self {
        Route {
            from: record.from,
            to: record.to,
            length_m: record.length,
            travel_time_min: record.travel_time,
            from_lat: record.from_lat,
            from_lon: record.from_lon,
            to_lat: record.to_lat,
            to_lon: record.to_lon,
        }
    }
}

impl From<PhotoRecord> for Photo {
    fn from(record: PhotoRecord) -> Self {
        Photo {
            id: record.id,
            location: Coordinate::new(record.lat, record.lon),
            file_ref: record.photo_path,
        }
    }
}

/// Load the buildings table
pub fn load_buildings(path: &Path) -> Result<Vec<Building>> {
    load_table::<BuildingRecord, Building>("buildings", path)
}

/// Load the routes table
pub fn load_routes(path: &Path) -> Result<Vec<Route>> {
    load_table::<RouteRecord, Route>("routes", path)
}

/// Load the photographs table.
///
/// Rows that fail to parse are skipped and logged. An absent file yields an
/// empty table; any other failure to open the file is still an error.
pub fn load_photos(path: &Path) -> Result<Vec<Photo>> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "Photos table not found; no photos will be shown");
        return Ok(Vec::new());
    }

    let mut reader = open_reader("photos", path)?;
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for record in reader.deserialize::<PhotoRecord>() {
        match record {
            Ok(record) => rows.push(Photo::from(record)),
            Err(e) => {
                skipped += 1;
                let line = e.position().map(|pos| pos.line());
                tracing::warn!(path = %path.display(), line, error = %e, "Skipping photo row");
            }
        }
    }

    tracing::debug!(table = "photos", rows = rows.len(), skipped, path = %path.display(), "Loaded table");
    Ok(rows)
}

fn load_table<R, T>(table: &'static str, path: &Path) -> Result<Vec<T>>
where
    R: for<'de> Deserialize<'de>,
    T: From<R>,
{
    let mut reader = open_reader(table, path)?;

    let mut rows = Vec::new();
    for record in reader.deserialize::<R>() {
        let record = record.map_err(|e| data_source_error(table, path, e))?;
        rows.push(T::from(record));
    }

    tracing::debug!(table, rows = rows.len(), path = %path.display(), "Loaded table");
    Ok(rows)
}

fn open_reader(table: &'static str, path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| data_source_error(table, path, e))
}

fn data_source_error(table: &'static str, path: &Path, error: csv::Error) -> CampusError {
    CampusError::DataSource {
        table,
        path: path.to_path_buf(),
        reason: error.to_string(),
    }
}

/// Canonical text form of an identifier cell.
///
/// Spreadsheet exports write integer ids as `7.0` once a column has held a
/// blank; those must still equal the `7` written in other tables.
fn canonical_id(raw: &str) -> String {
    let raw = raw.trim();
    match raw.parse::<f64>() {
        Ok(v) if v.fract() == 0.0
            && v >= i64::MIN as f64
            && v < i64::MAX as f64
            && !raw.contains(['e', 'E']) =>
        {
            format!("{}", v as i64)
        }
        _ => raw.to_string(),
    }
}

fn deserialize_building_id<'de, D>(deserializer: D) -> std::result::Result<BuildingId, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(BuildingId(canonical_id(&raw)))
}

fn deserialize_photo_id<'de, D>(deserializer: D) -> std::result::Result<PhotoId, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();

    if let Ok(id) = raw.parse::<u64>() {
        return Ok(PhotoId(id));
    }

    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v < u64::MAX as f64 => {
            Ok(PhotoId(v as u64))
        }
        _ => Err(serde::de::Error::custom(format!("invalid photo id '{}'", raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_id() {
        assert_eq!(canonical_id("7"), "7");
        assert_eq!(canonical_id(" 7.0 "), "7");
        assert_eq!(canonical_id("-3.0"), "-3");
        assert_eq!(canonical_id("7.5"), "7.5");
        assert_eq!(canonical_id("B12"), "B12");
        assert_eq!(canonical_id("1e3"), "1e3");
    }

    #[test]
    fn test_oversized_ids_keep_their_text() {
        assert_eq!(canonical_id("9223372036854775808.0"), "9223372036854775808.0");
        assert_eq!(canonical_id("18446744073709551616.0"), "18446744073709551616.0");
        assert_ne!(
            canonical_id("9223372036854775808.0"),
            canonical_id("18446744073709551616.0")
        );
        assert_eq!(canonical_id("-9223372036854775808.0"), "-9223372036854775808");
    }

    #[test]
    fn test_data_sources_in_dir() {
        let sources = DataSources::in_dir("AttributeTable");
        assert_eq!(sources.buildings, PathBuf::from("AttributeTable/Building_Points.csv"));
        assert_eq!(sources.routes, PathBuf::from("AttributeTable/All_Solved_Routes.csv"));
        assert_eq!(sources.photos, PathBuf::from("AttributeTable/Mapillary_Images.csv"));
    }

    #[test]
    fn test_missing_sources() {
        let sources = DataSources::in_dir("/nonexistent/campusnav");
        let missing = sources.missing();
        assert_eq!(missing, vec![sources.buildings.as_path(), sources.routes.as_path()]);
    }
}
