use campusnav_core::models::{Route, Segment};

/// A route that can be drawn from its embedded coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawableRoute<'a> {
    pub route: &'a Route,
    pub segment: Segment,
}

/// Every route with all four endpoint coordinates, in table order.
///
/// Shown instead of a single path when the selected buildings have no direct
/// route. Records with any missing coordinate are skipped, not reported.
pub fn all_drawable_routes(routes: &[Route]) -> Vec<DrawableRoute<'_>> {
    routes
        .iter()
        .filter_map(|route| match route.segment() {
            Ok(segment) => Some(DrawableRoute { route, segment }),
            Err(e) => {
                tracing::debug!("Skipping route in fallback view: {}", e);
                None
            }
        })
        .collect()
}
