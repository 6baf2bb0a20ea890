use crate::cli::SearchArgs;
use crate::config_loader::{load_config_with_overrides, open_store, GlobalOptions};
use crate::output::OutputWriter;
use crate::output_types::{BuildingRow, SearchOutput};
use anyhow::Result;
use campusnav_nav::search;
use campusnav_store::ReferenceTables;

pub fn execute(args: SearchArgs, options: &GlobalOptions, output: &OutputWriter) -> Result<()> {
    let config = load_config_with_overrides(options, options.overrides())?;
    let store = open_store(&config)?;

    let matches: Vec<BuildingRow> = search(store.buildings(), &args.query)
        .into_iter()
        .map(BuildingRow::from)
        .collect();

    if matches.is_empty() {
        output.warning(format!("No buildings match '{}'", args.query));
    }

    if output.is_json() {
        output.result(SearchOutput { query: args.query, matches })?;
    } else if !matches.is_empty() {
        output.section(format!("Buildings matching '{}'", args.query));
        output.table(matches)?;
    }

    Ok(())
}
