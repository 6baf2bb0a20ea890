//! Campus Navigator Store - Reference data tables
//!
//! This crate defines the read-only table port, the in-memory store that owns
//! the tables for a session, and the CSV loader that fills it at startup.

pub mod loader;
pub mod memory;
pub mod ports;

pub use loader::DataSources;
pub use memory::ReferenceStore;
pub use ports::ReferenceTables;
