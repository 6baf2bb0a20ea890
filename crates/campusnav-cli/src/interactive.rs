use anyhow::{bail, Result};
use dialoguer::{Confirm, Select};

/// Buildings picked from the selectors
#[derive(Debug)]
pub struct InteractiveRouteResult {
    pub start: String,
    pub end: String,
}

/// Pick start and destination buildings from the building list.
///
/// The selectors default to the first and second building, like the map view
/// does on first load.
pub fn interactive_route(names: &[&str]) -> Result<InteractiveRouteResult> {
    if names.is_empty() {
        bail!("No buildings to choose from");
    }

    println!("\n🧭 Campus Navigator\n");

    let start_idx = Select::new()
        .with_prompt("Start building")
        .items(names)
        .default(0)
        .interact()?;

    let end_idx = Select::new()
        .with_prompt("Destination building")
        .items(names)
        .default(1.min(names.len() - 1))
        .interact()?;

    if start_idx == end_idx {
        let proceed = Confirm::new()
            .with_prompt("Start and destination are the same building. Continue?")
            .default(false)
            .interact()?;
        if !proceed {
            bail!("Route selection cancelled");
        }
    }

    Ok(InteractiveRouteResult {
        start: names[start_idx].to_string(),
        end: names[end_idx].to_string(),
    })
}
