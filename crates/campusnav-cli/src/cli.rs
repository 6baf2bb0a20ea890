use campusnav_core::models::{parse_distance, Distance};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Campus Navigator - routes between campus buildings with a photo walkthrough
#[derive(Parser, Debug)]
#[command(name = "campusnav")]
#[command(about = "Campus route and photo navigator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./campusnav.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the building, route, and photo tables
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory holding the photo files
    #[arg(long, global = true, value_name = "DIR")]
    pub image_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all campus buildings
    Buildings,

    /// Search buildings by name
    Search(SearchArgs),

    /// Show the route between two buildings and the photos along it
    Route(RouteArgs),

    /// Walk through the photos along a route
    Slideshow(SlideshowArgs),

    /// Show the effective configuration and where each value came from
    Config,
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Part of a building name (case-insensitive)
    pub query: String,
}

#[derive(Parser, Debug)]
pub struct RouteArgs {
    /// Starting building name
    #[arg(required_unless_present = "interactive")]
    pub start: Option<String>,

    /// Destination building name
    #[arg(required_unless_present = "interactive")]
    pub end: Option<String>,

    /// Photo inclusion radius around each endpoint (e.g., "50m", "0.05km")
    #[arg(long, value_parser = parse_threshold)]
    pub threshold: Option<Distance>,

    /// Print the map as a GeoJSON FeatureCollection
    #[arg(long)]
    pub geojson: bool,

    /// Include the simulated user location on the map
    #[arg(long)]
    pub show_location: bool,

    /// Interactive mode - pick both buildings from a list
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(Parser, Debug)]
pub struct SlideshowArgs {
    /// Starting building name
    pub start: String,

    /// Destination building name
    pub end: String,

    /// Photo inclusion radius around each endpoint (e.g., "50m", "0.05km")
    #[arg(long, value_parser = parse_threshold)]
    pub threshold: Option<Distance>,

    /// Advance through every photo automatically
    #[arg(long)]
    pub autoplay: bool,

    /// Seconds per photo during autoplay (1-10)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=10))]
    pub delay: Option<u64>,

    /// Photo to show in manual mode, starting at 0
    #[arg(long, default_value = "0")]
    pub index: usize,
}

fn parse_threshold(s: &str) -> Result<Distance, String> {
    parse_distance(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_route_threshold_accepts_units() {
        let cli =
            Cli::try_parse_from(["campusnav", "route", "Library", "Gym", "--threshold", "0.1km"])
                .unwrap();
        match cli.command {
            Commands::Route(args) => {
                assert_eq!(args.threshold.unwrap().to_meters(), 100.0);
                assert_eq!(args.start.as_deref(), Some("Library"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_route_requires_names_unless_interactive() {
        assert!(Cli::try_parse_from(["campusnav", "route", "Library"]).is_err());
        assert!(Cli::try_parse_from(["campusnav", "route", "-i"]).is_ok());
    }

    #[test]
    fn test_slideshow_delay_range() {
        assert!(Cli::try_parse_from(["campusnav", "slideshow", "A", "B", "--delay", "0"]).is_err());
        assert!(Cli::try_parse_from(["campusnav", "slideshow", "A", "B", "--delay", "11"]).is_err());
        assert!(Cli::try_parse_from(["campusnav", "slideshow", "A", "B", "--delay", "10"]).is_ok());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["campusnav", "buildings", "--json", "--data-dir", "/tmp/tables"])
                .unwrap();
        assert!(cli.json);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/tables")));
    }
}
