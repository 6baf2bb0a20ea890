//! Error types for the campus navigator

use std::path::PathBuf;
use thiserror::Error;

use crate::models::BuildingId;

#[derive(Debug, Error)]
pub enum CampusError {
    // Lookup errors
    #[error("Building not found: {name}")]
    BuildingNotFound { name: String },

    #[error("Building id not found: {id}")]
    BuildingIdNotFound { id: BuildingId },

    // Reference data errors
    #[error("Failed to load {table} table from {path}: {reason}")]
    DataSource {
        table: &'static str,
        path: PathBuf,
        reason: String,
    },

    #[error("Route {from} -> {to} is missing coordinate {field}")]
    MissingCoordinate {
        from: BuildingId,
        to: BuildingId,
        field: &'static str,
    },

    // Image errors
    #[error("Could not load image {path}: {reason}")]
    ImageLoad { path: PathBuf, reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },
}

impl CampusError {
    /// Lookup failures the presentation layer should show as a message
    pub fn is_not_found(&self) -> bool {
        matches!(self, CampusError::BuildingNotFound { .. } | CampusError::BuildingIdNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, CampusError>;
