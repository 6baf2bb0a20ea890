use campusnav_core::error::Result;
use campusnav_core::models::{Building, BuildingId, Coordinate, Route, Segment};
use campusnav_store::ReferenceTables;

use crate::resolver::BuildingResolver;

/// Outcome of looking up the route between two buildings
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteMatch<'a> {
    /// A route record joins the two buildings.
    ///
    /// `from` and `to` follow the requested direction, not the stored one.
    Found {
        route: &'a Route,
        from: Coordinate,
        to: Coordinate,
    },
    /// No record joins the two buildings
    NotFound,
}

impl<'a> RouteMatch<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, RouteMatch::Found { .. })
    }

    pub fn route(&self) -> Option<&'a Route> {
        match self {
            RouteMatch::Found { route, .. } => Some(*route),
            RouteMatch::NotFound => None,
        }
    }

    /// The line to draw for a found route
    pub fn segment(&self) -> Option<Segment> {
        match self {
            RouteMatch::Found { from, to, .. } => Some(Segment::new(*from, *to)),
            RouteMatch::NotFound => None,
        }
    }
}

/// Direction-agnostic lookup over the precomputed route table
pub struct RouteMatcher<'a> {
    routes: &'a [Route],
    resolver: BuildingResolver<'a>,
}

impl<'a> RouteMatcher<'a> {
    pub fn new(routes: &'a [Route], buildings: &'a [Building]) -> Self {
        Self { routes, resolver: BuildingResolver::new(buildings) }
    }

    pub fn from_tables<T: ReferenceTables>(tables: &'a T) -> Self {
        Self::new(tables.routes(), tables.buildings())
    }

    /// First route record joining `a` and `b` in either stored direction.
    ///
    /// `find(x, x)` only succeeds when the table holds an explicit self-loop.
    pub fn find(&self, a: &BuildingId, b: &BuildingId) -> Option<&'a Route> {
        self.routes.iter().find(|route| route.connects(a, b))
    }

    /// Match two building ids.
    ///
    /// Absence of a route is `Ok(RouteMatch::NotFound)`. An error is returned
    /// only when a route exists without embedded coordinates and one of its
    /// buildings is missing from the building table.
    pub fn match_ids(&self, from: &BuildingId, to: &BuildingId) -> Result<RouteMatch<'a>> {
        let Some(route) = self.find(from, to) else {
            tracing::debug!(%from, %to, "No route between buildings");
            return Ok(RouteMatch::NotFound);
        };

        let segment = match oriented_segment(route, from) {
            Some(segment) => segment,
            None => Segment::new(
                self.resolver.by_id(from)?.location,
                self.resolver.by_id(to)?.location,
            ),
        };

        Ok(found(route, segment))
    }
}

fn found(route: &Route, segment: Segment) -> RouteMatch<'_> {
    RouteMatch::Found { route, from: segment.from, to: segment.to }
}

/// Embedded coordinates turned to start at `from`
fn oriented_segment(route: &Route, from: &BuildingId) -> Option<Segment> {
    let segment = route.segment().ok()?;
    if &route.from == from {
        Some(segment)
    } else {
        Some(segment.reversed())
    }
}
