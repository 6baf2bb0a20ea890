pub mod building;
pub mod geometry;
pub mod photo;
pub mod route;

pub use building::{Building, BuildingId};
pub use geometry::{parse_distance, Coordinate, Distance, DistanceUnit, Segment};
pub use photo::{Photo, PhotoId};
pub use route::Route;
