//! GeoJSON rendering of the campus map.
//!
//! Every feature carries a `kind` property (`building`, `route`, `fallback`,
//! `photo`, `user_location`) so a viewer can style it. Positions are
//! `[longitude, latitude]`, and the collection's `center` member uses the
//! same order.

use campusnav_core::models::{Coordinate, Segment};
use campusnav_nav::Navigation;
use campusnav_store::ReferenceTables;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};

/// Map view options
#[derive(Debug, Clone, Copy)]
pub struct MapView {
    pub map_center: Coordinate,
    /// Simulated position, drawn and used as the center when present
    pub user_location: Option<Coordinate>,
}

impl MapView {
    pub fn center(&self) -> Coordinate {
        self.user_location.unwrap_or(self.map_center)
    }
}

/// Build the feature collection for one navigation result
pub fn build_map<T: ReferenceTables>(
    tables: &T,
    navigation: &Navigation<'_>,
    view: MapView,
) -> FeatureCollection {
    let mut features: Vec<Feature> = tables
        .buildings()
        .iter()
        .map(|building| {
            let mut props = kind("building");
            props.insert("id".to_string(), JsonValue::from(building.id.to_string()));
            props.insert("name".to_string(), JsonValue::from(building.name.clone()));
            feature(point(building.location), props)
        })
        .collect();

    match navigation {
        Navigation::Route { route, from, to, photos, .. } => {
            let mut props = kind("route");
            props.insert("label".to_string(), JsonValue::from(route.summary()));
            props.insert("length_m".to_string(), JsonValue::from(route.length_m));
            props.insert("travel_time_min".to_string(), JsonValue::from(route.travel_time_min));
            features.push(feature(line(Segment::new(*from, *to)), props));

            for photo in photos {
                let mut props = kind("photo");
                props.insert("id".to_string(), JsonValue::from(photo.id.0));
                props.insert("photo_path".to_string(), JsonValue::from(photo.file_ref.clone()));
                features.push(feature(point(photo.location), props));
            }
        }
        Navigation::Fallback { segments, .. } => {
            for drawable in segments {
                let mut props = kind("fallback");
                props.insert("from".to_string(), JsonValue::from(drawable.route.from.to_string()));
                props.insert("to".to_string(), JsonValue::from(drawable.route.to.to_string()));
                features.push(feature(line(drawable.segment), props));
            }
        }
    }

    if let Some(location) = view.user_location {
        let mut props = kind("user_location");
        props.insert("label".to_string(), JsonValue::from("You Are Here"));
        features.push(feature(point(location), props));
    }

    let mut members = JsonObject::new();
    members.insert("center".to_string(), JsonValue::from(view.center().to_position()));

    FeatureCollection { bbox: None, features, foreign_members: Some(members) }
}

fn kind(kind: &str) -> JsonObject {
    let mut props = JsonObject::new();
    props.insert("kind".to_string(), JsonValue::from(kind));
    props
}

fn point(at: Coordinate) -> Geometry {
    Geometry::new(Value::Point(at.to_position()))
}

fn line(segment: Segment) -> Geometry {
    Geometry::new(Value::LineString(vec![segment.from.to_position(), segment.to.to_position()]))
}

fn feature(geometry: Geometry, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
