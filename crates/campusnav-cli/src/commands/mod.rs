//! Command implementations

mod buildings;
mod config;
mod route;
mod search;
mod slideshow;

use crate::cli::{Cli, Commands};
use crate::config_loader::GlobalOptions;
use crate::errors;
use crate::output::OutputWriter;
use anyhow::Result;
use campusnav_core::error::CampusError;
use campusnav_core::models::Building;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let options = GlobalOptions {
        config: cli.config,
        data_dir: cli.data_dir,
        image_dir: cli.image_dir,
    };

    match cli.command {
        Commands::Buildings => buildings::execute(&options, &output),
        Commands::Search(args) => search::execute(args, &options, &output),
        Commands::Route(args) => route::execute(args, &options, &output),
        Commands::Slideshow(args) => slideshow::execute(args, &options, &output).await,
        Commands::Config => config::execute(&options, &output),
    }
}

/// Turn an unknown building name into an error that lists close matches
fn navigation_error(error: CampusError, buildings: &[Building]) -> anyhow::Error {
    match error {
        CampusError::BuildingNotFound { name } => {
            let similar = campusnav_nav::search(buildings, &name);
            errors::building_not_found(&name, &similar).into()
        }
        other => other.into(),
    }
}
