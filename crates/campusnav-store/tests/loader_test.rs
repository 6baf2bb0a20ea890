//! Integration tests for loading the reference tables from CSV

use campusnav_core::error::CampusError;
use campusnav_core::models::{BuildingId, PhotoId};
use campusnav_store::{DataSources, ReferenceStore, ReferenceTables};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BUILDINGS: &str = "\
OBJECTID,BuildingAr,ORIG_FID,Shape_X,Shape_Y
10,Library,1,39.24,21.50
11,Gym,2,39.25,21.51
12,Mosque,3,39.26,21.52
";

const ROUTES: &str = "\
FromID,ToID,Length,TravelTime,From_Lat,From_Lon,To_Lat,To_Lon
2,1,300,5,21.51,39.25,21.50,39.24
1.0,3.0,420.5,7.25,21.50,39.24,,
";

const PHOTOS: &str = "\
id,lat,lon,photo_path,captured_at
5,21.5003,39.24,C:/exports/images/5.jpg,2023-01-01
2,21.5101,39.25,images/2.jpg,2023-01-01
";

fn write_tables(dir: &Path, buildings: &str, routes: &str, photos: &str) -> DataSources {
    let sources = DataSources::in_dir(dir);
    fs::write(&sources.buildings, buildings).unwrap();
    fs::write(&sources.routes, routes).unwrap();
    fs::write(&sources.photos, photos).unwrap();
    sources
}

#[test]
fn test_load_all_tables() {
    let dir = TempDir::new().unwrap();
    let sources = write_tables(dir.path(), BUILDINGS, ROUTES, PHOTOS);

    let store = ReferenceStore::load(&sources).unwrap();
    assert_eq!(store.table_sizes(), (3, 2, 2));

    let library = &store.buildings()[0];
    assert_eq!(library.name, "Library");
    assert_eq!(library.id, BuildingId::from(1));
    assert_eq!(library.location.lat, 21.50);
    assert_eq!(library.location.lon, 39.24);

    let photo = &store.photos()[0];
    assert_eq!(photo.id, PhotoId(5));
    assert_eq!(photo.file_ref, "C:/exports/images/5.jpg");
}

#[test]
fn test_route_ids_are_canonicalized() {
    let dir = TempDir::new().unwrap();
    let sources = write_tables(dir.path(), BUILDINGS, ROUTES, PHOTOS);

    let store = ReferenceStore::load(&sources).unwrap();
    let second = &store.routes()[1];

    assert_eq!(second.from, BuildingId::from(1));
    assert_eq!(second.to, BuildingId::from(3));
    assert_eq!(second.length_m, 420.5);
    assert_eq!(second.travel_time_min, 7.25);
}

#[test]
fn test_blank_route_coordinates_load_as_missing() {
    let dir = TempDir::new().unwrap();
    let sources = write_tables(dir.path(), BUILDINGS, ROUTES, PHOTOS);

    let store = ReferenceStore::load(&sources).unwrap();

    assert!(store.routes()[0].segment().is_ok());
    let partial = &store.routes()[1];
    assert_eq!(partial.from_lat, Some(21.50));
    assert_eq!(partial.to_lat, None);
    assert!(partial.segment().is_err());
}

#[test]
fn test_routes_without_coordinate_columns() {
    let dir = TempDir::new().unwrap();
    let routes = "FromID,ToID,Length,TravelTime\n2,1,300,5\n";
    let sources = write_tables(dir.path(), BUILDINGS, routes, PHOTOS);

    let store = ReferenceStore::load(&sources).unwrap();
    let route = &store.routes()[0];

    assert_eq!(route.from_lat, None);
    assert_eq!(route.to_lon, None);
}

#[test]
fn test_unparsable_coordinate_cell_is_missing() {
    let dir = TempDir::new().unwrap();
    let routes = "FromID,ToID,Length,TravelTime,From_Lat,From_Lon,To_Lat,To_Lon\n2,1,300,5,n/a,39.25,21.50,39.24\n";
    let sources = write_tables(dir.path(), BUILDINGS, routes, PHOTOS);

    let store = ReferenceStore::load(&sources).unwrap();
    assert_eq!(store.routes()[0].from_lat, None);
}

#[test]
fn test_float_photo_ids_are_accepted() {
    let dir = TempDir::new().unwrap();
    let photos = "id,lat,lon,photo_path\n1234567890123.0,21.5,39.24,a.jpg\n";
    let sources = write_tables(dir.path(), BUILDINGS, ROUTES, photos);

    let store = ReferenceStore::load(&sources).unwrap();
    assert_eq!(store.photos()[0].id, PhotoId(1_234_567_890_123));
}

#[test]
fn test_missing_file_names_the_table() {
    let dir = TempDir::new().unwrap();
    let sources = write_tables(dir.path(), BUILDINGS, ROUTES, PHOTOS);
    fs::remove_file(&sources.routes).unwrap();

    let err = ReferenceStore::load(&sources).unwrap_err();
    match err {
        CampusError::DataSource { table, path, .. } => {
            assert_eq!(table, "routes");
            assert_eq!(path, sources.routes);
        }
        other => panic!("expected DataSource error, got {:?}", other),
    }
}

#[test]
fn test_malformed_row_fails_the_load() {
    let dir = TempDir::new().unwrap();
    let buildings = "BuildingAr,ORIG_FID,Shape_X,Shape_Y\nLibrary,1,not-a-number,21.50\n";
    let sources = write_tables(dir.path(), buildings, ROUTES, PHOTOS);

    let err = ReferenceStore::load(&sources).unwrap_err();
    assert!(matches!(err, CampusError::DataSource { table: "buildings", .. }));
}

#[test]
fn test_bad_photo_row_is_skipped() {
    let dir = TempDir::new().unwrap();
    let photos = "id,lat,lon,photo_path\n5,21.5003,39.24,a/5.jpg\n6,,39.24,a/6.jpg\n7,21.5004,39.24,a/7.jpg\n";
    let sources = write_tables(dir.path(), BUILDINGS, ROUTES, photos);

    let store = ReferenceStore::load(&sources).unwrap();
    let ids: Vec<PhotoId> = store.photos().iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![PhotoId(5), PhotoId(7)]);
    assert_eq!(store.table_sizes(), (3, 2, 2));
}

#[test]
fn test_missing_photos_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let sources = write_tables(dir.path(), BUILDINGS, ROUTES, PHOTOS);
    fs::remove_file(&sources.photos).unwrap();

    let store = ReferenceStore::load(&sources).unwrap();
    assert_eq!(store.table_sizes(), (3, 2, 0));
    assert!(sources.missing().is_empty());
}

#[test]
fn test_bad_route_row_still_fails_the_load() {
    let dir = TempDir::new().unwrap();
    let routes = "FromID,ToID,Length,TravelTime\n2,1,,5\n";
    let sources = write_tables(dir.path(), BUILDINGS, routes, PHOTOS);

    let err = ReferenceStore::load(&sources).unwrap_err();
    assert!(matches!(err, CampusError::DataSource { table: "routes", .. }));
}
