//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use campusnav_core::config::{CliConfigOverrides, LayeredConfig, DEFAULT_CONFIG_FILE};
use campusnav_store::{DataSources, ReferenceStore};
use std::path::{Path, PathBuf};

use crate::errors;

/// Settings shared by every command
#[derive(Debug, Default)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub image_dir: Option<PathBuf>,
}

impl GlobalOptions {
    /// CLI overrides carrying the global directory flags
    pub fn overrides(&self) -> CliConfigOverrides {
        CliConfigOverrides {
            data_dir: self.data_dir.clone(),
            image_dir: self.image_dir.clone(),
            ..Default::default()
        }
    }
}

/// Load layered configuration: defaults, then file, then environment.
///
/// An explicit `--config` file must exist. Without one, `campusnav.toml` in the
/// current directory is used when present.
pub fn load_config(options: &GlobalOptions) -> Result<LayeredConfig> {
    let config = LayeredConfig::with_defaults();

    let config = match config_file(options.config.as_deref()) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading configuration file");
            config
                .load_from_file(&path)
                .with_context(|| format!("Failed to load configuration file {}", path.display()))?
        }
        None => config,
    };

    Ok(config.load_from_env())
}

/// Load layered configuration with CLI overrides
pub fn load_config_with_overrides(
    options: &GlobalOptions,
    overrides: CliConfigOverrides,
) -> Result<LayeredConfig> {
    let mut config = load_config(options)?;
    config.update_from_cli(overrides);
    Ok(config)
}

/// Load the reference tables named by the configuration
pub fn open_store(config: &LayeredConfig) -> Result<ReferenceStore> {
    let data_dir = &config.data_dir.value;
    let sources = DataSources::in_dir(data_dir);

    let missing = sources.missing();
    if !missing.is_empty() {
        return Err(errors::data_files_missing(data_dir, &missing).into());
    }

    Ok(ReferenceStore::load(&sources)?)
}

fn config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.is_file().then_some(default)
        }
    }
}
