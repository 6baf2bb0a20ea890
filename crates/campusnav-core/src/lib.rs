//! Campus Navigator Core - Domain models, errors, and configuration
//!
//! This crate contains the types shared by every other campusnav crate:
//! buildings, routes, photographs, coordinates, and the layered configuration.

pub mod config;
pub mod error;
pub mod models;

pub use error::{CampusError, Result};
