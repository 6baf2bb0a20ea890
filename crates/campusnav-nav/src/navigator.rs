use campusnav_core::error::Result;
use campusnav_core::models::{Building, Coordinate, Photo, Route, Segment};
use campusnav_store::ReferenceTables;

use crate::fallback::{all_drawable_routes, DrawableRoute};
use crate::matcher::{RouteMatch, RouteMatcher};
use crate::proximity::ProximityFilter;
use crate::resolver::BuildingResolver;

/// Everything the map and slideshow need for one pair of selected buildings
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation<'a> {
    /// A direct route with the photos near its endpoints, in id order
    Route {
        start: &'a Building,
        end: &'a Building,
        route: &'a Route,
        from: Coordinate,
        to: Coordinate,
        photos: Vec<&'a Photo>,
    },
    /// No direct route; every drawable route is shown instead
    Fallback {
        start: &'a Building,
        end: &'a Building,
        segments: Vec<DrawableRoute<'a>>,
    },
}

impl<'a> Navigation<'a> {
    pub fn start(&self) -> &'a Building {
        match self {
            Navigation::Route { start, .. } | Navigation::Fallback { start, .. } => start,
        }
    }

    pub fn end(&self) -> &'a Building {
        match self {
            Navigation::Route { end, .. } | Navigation::Fallback { end, .. } => end,
        }
    }

    pub fn is_route(&self) -> bool {
        matches!(self, Navigation::Route { .. })
    }

    /// Photos for the slideshow; empty on fallback
    pub fn photos(&self) -> &[&'a Photo] {
        match self {
            Navigation::Route { photos, .. } => photos,
            Navigation::Fallback { .. } => &[],
        }
    }

    /// The drawn line of a direct route, oriented start to end
    pub fn segment(&self) -> Option<Segment> {
        match self {
            Navigation::Route { from, to, .. } => Some(Segment::new(*from, *to)),
            Navigation::Fallback { .. } => None,
        }
    }

    /// Tooltip text for a direct route
    pub fn label(&self) -> Option<String> {
        match self {
            Navigation::Route { route, .. } => Some(route.summary()),
            Navigation::Fallback { .. } => None,
        }
    }
}

/// Recomputes the displayed route whenever the selection changes.
///
/// Holds only borrowed reference tables, so any number of navigators can share
/// one loaded store.
pub struct Navigator<'a> {
    routes: &'a [Route],
    photos: &'a [Photo],
    resolver: BuildingResolver<'a>,
    matcher: RouteMatcher<'a>,
    filter: ProximityFilter,
}

impl<'a> Navigator<'a> {
    pub fn new<T: ReferenceTables>(tables: &'a T, filter: ProximityFilter) -> Self {
        Self {
            routes: tables.routes(),
            photos: tables.photos(),
            resolver: BuildingResolver::from_tables(tables),
            matcher: RouteMatcher::from_tables(tables),
            filter,
        }
    }

    pub fn filter(&self) -> ProximityFilter {
        self.filter
    }

    pub fn resolver(&self) -> &BuildingResolver<'a> {
        &self.resolver
    }

    /// Resolve both display names and build the view for them.
    ///
    /// Fails only when a name is unknown or a matched route cannot be placed
    /// on the map.
    pub fn navigate(&self, start_name: &str, end_name: &str) -> Result<Navigation<'a>> {
        let start = self.resolver.resolve(start_name)?;
        let end = self.resolver.resolve(end_name)?;
        self.navigate_buildings(start, end)
    }

    pub fn navigate_buildings(&self, start: &'a Building, end: &'a Building) -> Result<Navigation<'a>> {
        match self.matcher.match_ids(&start.id, &end.id)? {
            RouteMatch::Found { route, from, to } => {
                let photos = self.filter.apply(self.photos, from, to);
                tracing::info!(
                    start = %start.name,
                    end = %end.name,
                    photos = photos.len(),
                    "{}",
                    route.summary()
                );
                Ok(Navigation::Route { start, end, route, from, to, photos })
            }
            RouteMatch::NotFound => {
                let segments = all_drawable_routes(self.routes);
                tracing::warn!(
                    start = %start.name,
                    end = %end.name,
                    drawable = segments.len(),
                    "No route found between the selected buildings"
                );
                Ok(Navigation::Fallback { start, end, segments })
            }
        }
    }
}
