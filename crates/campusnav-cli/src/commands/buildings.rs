use crate::config_loader::{load_config_with_overrides, open_store, GlobalOptions};
use crate::output::OutputWriter;
use crate::output_types::{BuildingRow, BuildingsOutput};
use anyhow::Result;
use campusnav_store::ReferenceTables;

pub fn execute(options: &GlobalOptions, output: &OutputWriter) -> Result<()> {
    let config = load_config_with_overrides(options, options.overrides())?;
    let store = open_store(&config)?;

    let rows: Vec<BuildingRow> = store.buildings().iter().map(BuildingRow::from).collect();

    if output.is_json() {
        output.result(BuildingsOutput { count: rows.len(), buildings: rows })?;
    } else {
        output.section(format!("Campus Buildings ({})", rows.len()));
        output.table(rows)?;
    }

    Ok(())
}
