//! In-memory reference store.
//!
//! The store is built once at process start and only ever borrowed afterwards;
//! no component mutates it or re-reads the tables during a session.

use campusnav_core::error::Result;
use campusnav_core::models::{Building, Photo, Route};
use std::collections::HashSet;

use crate::loader::{self, DataSources};
use crate::ports::ReferenceTables;

/// Owner of the building, route, and photograph tables for a session
#[derive(Debug, Clone, Default)]
pub struct ReferenceStore {
    buildings: Vec<Building>,
    routes: Vec<Route>,
    photos: Vec<Photo>,
}

impl ReferenceStore {
    /// Create a store from already-loaded tables
    pub fn new(buildings: Vec<Building>, routes: Vec<Route>, photos: Vec<Photo>) -> Self {
        let store = Self { buildings, routes, photos };
        store.report_duplicates();
        store
    }

    /// Load all three tables from disk
    pub fn load(sources: &DataSources) -> Result<Self> {
        let buildings = loader::load_buildings(&sources.buildings)?;
        let routes = loader::load_routes(&sources.routes)?;
        let photos = loader::load_photos(&sources.photos)?;

        tracing::info!(
            buildings = buildings.len(),
            routes = routes.len(),
            photos = photos.len(),
            "Loaded reference tables"
        );

        Ok(Self::new(buildings, routes, photos))
    }

    /// Number of rows per table as (buildings, routes, photos)
    pub fn table_sizes(&self) -> (usize, usize, usize) {
        (self.buildings.len(), self.routes.len(), self.photos.len())
    }

    /// Warn about rows that lookups will shadow.
    ///
    /// The first record keeps winning; later duplicates are unreachable by name
    /// or id lookup but stay in the table.
    fn report_duplicates(&self) {
        let mut names = HashSet::new();
        let mut ids = HashSet::new();

        for building in &self.buildings {
            if !names.insert(building.name.as_str()) {
                tracing::warn!(name = %building.name, "Duplicate building name; first record wins");
            }
            if !ids.insert(&building.id) {
                tracing::warn!(id = %building.id, "Duplicate building id; first record wins");
            }
        }

        let mut pairs = HashSet::new();
        for route in &self.routes {
            let pair = if route.from <= route.to {
                (&route.from, &route.to)
            } else {
                (&route.to, &route.from)
            };
            if !pairs.insert(pair) {
                tracing::warn!(
                    from = %route.from,
                    to = %route.to,
                    "Duplicate route for building pair; first record wins"
                );
            }
        }
    }
}

impl ReferenceTables for ReferenceStore {
    fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    fn routes(&self) -> &[Route] {
        &self.routes
    }

    fn photos(&self) -> &[Photo] {
        &self.photos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_preserves_table_order() {
        let store = ReferenceStore::new(
            vec![
                Building::new(2, "Gym", 21.51, 39.25),
                Building::new(1, "Library", 21.50, 39.24),
            ],
            vec![Route::new(2, 1, 300.0, 5.0), Route::new(1, 3, 120.0, 2.0)],
            vec![Photo::new(9, 21.5, 39.2, "a.jpg"), Photo::new(1, 21.5, 39.2, "b.jpg")],
        );

        let names: Vec<&str> = store.buildings().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Gym", "Library"]);
        assert_eq!(store.routes()[0].length_m, 300.0);
        assert_eq!(store.photos()[0].file_ref, "a.jpg");
        assert_eq!(store.table_sizes(), (2, 2, 2));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let store = ReferenceStore::new(
            vec![
                Building::new(1, "Library", 21.50, 39.24),
                Building::new(2, "Library", 21.51, 39.25),
            ],
            vec![Route::new(1, 2, 300.0, 5.0), Route::new(2, 1, 310.0, 6.0)],
            vec![],
        );

        assert_eq!(store.table_sizes(), (2, 2, 0));
    }

    #[test]
    fn test_default_store_is_empty() {
        let store = ReferenceStore::default();
        assert!(store.buildings().is_empty());
        assert!(store.routes().is_empty());
        assert!(store.photos().is_empty());
    }
}
