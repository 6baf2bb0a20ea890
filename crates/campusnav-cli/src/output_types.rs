use campusnav_core::models::{Building, Photo};
use serde::Serialize;
use tabled::Tabled;

/// One row of the building list
#[derive(Debug, Serialize, Tabled)]
pub struct BuildingRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Latitude")]
    pub lat: f64,
    #[tabled(rename = "Longitude")]
    pub lon: f64,
}

impl From<&Building> for BuildingRow {
    fn from(building: &Building) -> Self {
        Self {
            id: building.id.to_string(),
            name: building.name.clone(),
            lat: building.location.lat,
            lon: building.location.lon,
        }
    }
}

/// Output for buildings command
#[derive(Debug, Serialize)]
pub struct BuildingsOutput {
    pub count: usize,
    pub buildings: Vec<BuildingRow>,
}

/// Output for search command
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub query: String,
    pub matches: Vec<BuildingRow>,
}

/// A photo selected for the walkthrough
#[derive(Debug, Serialize, Tabled)]
pub struct PhotoRow {
    #[tabled(rename = "ID")]
    pub id: u64,
    #[tabled(rename = "Latitude")]
    pub lat: f64,
    #[tabled(rename = "Longitude")]
    pub lon: f64,
    #[tabled(rename = "Nearest endpoint (m)")]
    #[serde(rename = "nearest_endpoint_m")]
    pub distance_m: String,
    #[tabled(rename = "File")]
    pub file: String,
}

impl PhotoRow {
    pub fn new(photo: &Photo, distance_m: f64, file: String) -> Self {
        Self {
            id: photo.id.0,
            lat: photo.location.lat,
            lon: photo.location.lon,
            distance_m: format!("{:.1}", distance_m),
            file,
        }
    }
}

/// Output for route command
#[derive(Debug, Serialize)]
pub struct RouteOutput {
    pub start: String,
    pub end: String,
    pub found: bool,
    pub label: Option<String>,
    pub length_m: Option<f64>,
    pub travel_time_min: Option<f64>,
    pub threshold: String,
    pub photos: Vec<PhotoRow>,
    pub fallback_routes: Option<usize>,
}

/// One displayed slide
#[derive(Debug, Serialize)]
pub struct SlideOutput {
    pub index: usize,
    pub caption: String,
    pub photo_id: u64,
    pub path: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub error: Option<String>,
}

/// Output for slideshow command
#[derive(Debug, Serialize)]
pub struct SlideshowOutput {
    pub start: String,
    pub end: String,
    pub mode: &'static str,
    pub total: usize,
    pub slides: Vec<SlideOutput>,
    pub stopped: bool,
}

/// Output for config command
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigEntry {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}
