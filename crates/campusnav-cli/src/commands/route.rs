use crate::cli::RouteArgs;
use crate::config_loader::{load_config_with_overrides, open_store, GlobalOptions};
use crate::interactive;
use crate::map::{build_map, MapView};
use crate::output::OutputWriter;
use crate::output_types::{PhotoRow, RouteOutput};
use anyhow::{Context, Result};
use campusnav_core::config::CliConfigOverrides;
use campusnav_geo::geodesic_distance;
use campusnav_nav::{image_path, Navigation, Navigator, ProximityFilter};
use campusnav_store::ReferenceTables;

use super::navigation_error;

pub fn execute(args: RouteArgs, options: &GlobalOptions, output: &OutputWriter) -> Result<()> {
    let config = load_config_with_overrides(
        options,
        CliConfigOverrides { proximity_threshold: args.threshold, ..options.overrides() },
    )?;
    let store = open_store(&config)?;
    let navigator = Navigator::new(&store, ProximityFilter::new(config.proximity_threshold.value));

    let (start, end) = if args.interactive {
        let picked = interactive::interactive_route(&navigator.resolver().names())?;
        (picked.start, picked.end)
    } else {
        (
            args.start.context("Start building is required")?,
            args.end.context("Destination building is required")?,
        )
    };

    let navigation = navigator
        .navigate(&start, &end)
        .map_err(|e| navigation_error(e, store.buildings()))?;

    if args.geojson {
        let view = MapView {
            map_center: config.map_center.value,
            user_location: args.show_location.then_some(config.user_location.value),
        };
        return output.data(&build_map(&store, &navigation, view));
    }

    let image_dir = &config.image_dir.value;
    let photos: Vec<PhotoRow> = match &navigation {
        Navigation::Route { from, to, photos, .. } => photos
            .iter()
            .map(|photo| {
                let nearest = geodesic_distance(photo.location, *from)
                    .min(geodesic_distance(photo.location, *to));
                let file = image_path(image_dir, &photo.file_ref).display().to_string();
                PhotoRow::new(photo, nearest, file)
            })
            .collect(),
        Navigation::Fallback { .. } => Vec::new(),
    };

    if output.is_json() {
        let (length_m, travel_time_min, fallback_routes) = match &navigation {
            Navigation::Route { route, .. } => (Some(route.length_m), Some(route.travel_time_min), None),
            Navigation::Fallback { segments, .. } => (None, None, Some(segments.len())),
        };

        output.result(RouteOutput {
            start: navigation.start().name.clone(),
            end: navigation.end().name.clone(),
            found: navigation.is_route(),
            label: navigation.label(),
            length_m,
            travel_time_min,
            threshold: config.proximity_threshold.value.to_string(),
            photos,
            fallback_routes,
        })?;
        return Ok(());
    }

    output.section("Route");
    output.kv("From", &navigation.start().name);
    output.kv("To", &navigation.end().name);
    if args.show_location {
        output.kv("You are here", config.user_location.value);
    }

    match &navigation {
        Navigation::Route { .. } => {
            if let Some(label) = navigation.label() {
                output.success(format!("Route displayed! {}", label));
            }

            output.section(format!(
                "Visual Walkthrough (photos within {} of either end)",
                config.proximity_threshold.value
            ));
            if photos.is_empty() {
                output.info("No photos near this route");
            } else {
                output.table(photos)?;
                output.info(format!("Run 'campusnav slideshow \"{}\" \"{}\"' to view them", start, end));
            }
        }
        Navigation::Fallback { segments, .. } => {
            output.warning("No route found between selected buildings.");
            output.info(format!("Showing all {} routes with known coordinates instead", segments.len()));
        }
    }

    Ok(())
}
