use crate::config_loader::{load_config_with_overrides, GlobalOptions};
use crate::output::OutputWriter;
use crate::output_types::ConfigEntry;
use anyhow::Result;

pub fn execute(options: &GlobalOptions, output: &OutputWriter) -> Result<()> {
    let config = load_config_with_overrides(options, options.overrides())?;

    let entries: Vec<ConfigEntry> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigEntry { key, value, source: format!("{:?}", source) })
        .collect();

    if output.is_json() {
        output.result(entries)?;
    } else {
        output.section("Configuration");
        output.table(entries)?;
    }

    Ok(())
}
