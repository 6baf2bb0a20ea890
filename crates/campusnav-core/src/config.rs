use crate::error::{CampusError, Result};
use crate::models::{parse_distance, Coordinate, Distance};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Shortest autoplay delay between slides
pub const MIN_SLIDE_DELAY_SECS: u64 = 1;

/// Longest autoplay delay between slides
pub const MAX_SLIDE_DELAY_SECS: u64 = 10;

/// Default file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "campusnav.toml";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for the navigator
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// Directory holding the three reference tables
    pub data_dir: ConfigValue<PathBuf>,
    /// Directory photographs are resolved against
    pub image_dir: ConfigValue<PathBuf>,
    /// Photos closer than this to either route endpoint are shown
    pub proximity_threshold: ConfigValue<Distance>,
    pub slide_delay_secs: ConfigValue<u64>,
    /// Simulated "you are here" point
    pub user_location: ConfigValue<Coordinate>,
    pub map_center: ConfigValue<Coordinate>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            data_dir: ConfigValue::new(PathBuf::from("AttributeTable"), ConfigSource::Default),
            image_dir: ConfigValue::new(PathBuf::from("Images/images"), ConfigSource::Default),
            proximity_threshold: ConfigValue::new(Distance::meters(50.0), ConfigSource::Default),
            slide_delay_secs: ConfigValue::new(3, ConfigSource::Default),
            user_location: ConfigValue::new(Coordinate::new(21.4932, 39.2465), ConfigSource::Default),
            map_center: ConfigValue::new(Coordinate::new(21.4926, 39.2468), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| CampusError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| CampusError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(data_dir) = file_config.data_dir {
            self.data_dir.update(data_dir, ConfigSource::File);
        }

        if let Some(image_dir) = file_config.image_dir {
            self.image_dir.update(image_dir, ConfigSource::File);
        }

        if let Some(threshold) = file_config.proximity_threshold {
            let distance = parse_distance(&threshold).map_err(|_| CampusError::ConfigInvalid {
                key: "proximity_threshold".to_string(),
                reason: format!("Invalid distance '{}'. Use e.g. 50m or 0.05km", threshold),
            })?;
            self.proximity_threshold.update(distance, ConfigSource::File);
        }

        if let Some(secs) = file_config.slide_delay_secs {
            self.slide_delay_secs.update(validate_slide_delay(secs)?, ConfigSource::File);
        }

        if let Some([lat, lon]) = file_config.user_location {
            self.user_location.update(Coordinate::new(lat, lon), ConfigSource::File);
        }

        if let Some([lat, lon]) = file_config.map_center {
            self.map_center.update(Coordinate::new(lat, lon), ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // CAMPUSNAV_DATA_DIR
        if let Ok(dir) = env::var("CAMPUSNAV_DATA_DIR") {
            self.data_dir.update(PathBuf::from(dir), ConfigSource::Environment);
        }

        // CAMPUSNAV_IMAGE_DIR
        if let Ok(dir) = env::var("CAMPUSNAV_IMAGE_DIR") {
            self.image_dir.update(PathBuf::from(dir), ConfigSource::Environment);
        }

        // CAMPUSNAV_PROXIMITY_THRESHOLD
        if let Ok(threshold_str) = env::var("CAMPUSNAV_PROXIMITY_THRESHOLD") {
            match parse_distance(&threshold_str) {
                Ok(distance) => {
                    self.proximity_threshold.update(distance, ConfigSource::Environment)
                }
                Err(_) => tracing::warn!(
                    "Invalid CAMPUSNAV_PROXIMITY_THRESHOLD value '{}': expected a distance such as 50m",
                    threshold_str
                ),
            }
        }

        // CAMPUSNAV_SLIDE_DELAY
        if let Ok(delay_str) = env::var("CAMPUSNAV_SLIDE_DELAY") {
            match delay_str.trim().parse::<u64>().ok().and_then(|s| validate_slide_delay(s).ok()) {
                Some(secs) => self.slide_delay_secs.update(secs, ConfigSource::Environment),
                None => tracing::warn!(
                    "Invalid CAMPUSNAV_SLIDE_DELAY value '{}': expected whole seconds between {} and {}",
                    delay_str,
                    MIN_SLIDE_DELAY_SECS,
                    MAX_SLIDE_DELAY_SECS
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(data_dir) = overrides.data_dir {
            self.data_dir.update(data_dir, ConfigSource::Cli);
        }

        if let Some(image_dir) = overrides.image_dir {
            self.image_dir.update(image_dir, ConfigSource::Cli);
        }

        if let Some(threshold) = overrides.proximity_threshold {
            self.proximity_threshold.update(threshold, ConfigSource::Cli);
        }

        if let Some(secs) = overrides.slide_delay_secs {
            self.slide_delay_secs.update(secs, ConfigSource::Cli);
        }
    }

    /// Effective proximity threshold in meters
    pub fn threshold_meters(&self) -> f64 {
        self.proximity_threshold.value.to_meters()
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> BTreeMap<String, (String, ConfigSource)> {
        let mut map = BTreeMap::new();

        map.insert(
            "data_dir".to_string(),
            (self.data_dir.value.display().to_string(), self.data_dir.source),
        );

        map.insert(
            "image_dir".to_string(),
            (self.image_dir.value.display().to_string(), self.image_dir.source),
        );

        map.insert(
            "proximity_threshold".to_string(),
            (self.proximity_threshold.value.to_string(), self.proximity_threshold.source),
        );

        map.insert(
            "slide_delay_secs".to_string(),
            (self.slide_delay_secs.value.to_string(), self.slide_delay_secs.source),
        );

        map.insert(
            "user_location".to_string(),
            (self.user_location.value.to_string(), self.user_location.source),
        );

        map.insert(
            "map_center".to_string(),
            (self.map_center.value.to_string(), self.map_center.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    image_dir: Option<PathBuf>,
    proximity_threshold: Option<String>,
    slide_delay_secs: Option<u64>,
    user_location: Option<[f64; 2]>,
    map_center: Option<[f64; 2]>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub data_dir: Option<PathBuf>,
    pub image_dir: Option<PathBuf>,
    pub proximity_threshold: Option<Distance>,
    pub slide_delay_secs: Option<u64>,
}

/// Check an autoplay delay against the supported range
pub fn validate_slide_delay(secs: u64) -> Result<u64> {
    if (MIN_SLIDE_DELAY_SECS..=MAX_SLIDE_DELAY_SECS).contains(&secs) {
        Ok(secs)
    } else {
        Err(CampusError::ConfigInvalid {
            key: "slide_delay_secs".to_string(),
            reason: format!(
                "{} is out of range. Use {} to {} seconds",
                secs, MIN_SLIDE_DELAY_SECS, MAX_SLIDE_DELAY_SECS
            ),
        })
    }
}
