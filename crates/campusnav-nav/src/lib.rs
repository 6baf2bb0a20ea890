//! Campus Navigator - Route and photo matching engine
//!
//! Resolves building selections, looks up the precomputed route between them
//! in either direction, and selects the photographs near the route's endpoints.
//! When no route exists, every drawable route is offered instead.

pub mod fallback;
pub mod images;
pub mod matcher;
pub mod navigator;
pub mod proximity;
pub mod resolver;
pub mod search;
pub mod slideshow;

pub use fallback::{all_drawable_routes, DrawableRoute};
pub use images::{image_path, probe_image, ImageInfo};
pub use matcher::{RouteMatch, RouteMatcher};
pub use navigator::{Navigation, Navigator};
pub use proximity::{filter_nearby, ProximityFilter};
pub use resolver::BuildingResolver;
pub use search::search;
pub use slideshow::{PlaybackState, Slide, SlideDelay, SlideEvent, Slideshow, StopHandle};
