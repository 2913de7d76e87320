//! Export bundle writing.
//!
//! An export folder holds the cleaned sheets as CSV plus JSON files for
//! the business rules, prioritization weights, validation report and the
//! combined bundle.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{
    BUNDLE_FILE, CLIENTS_FILE, ExportPaths, RULES_FILE, TASKS_FILE, VALIDATION_FILE,
    WEIGHTS_FILE, WORKERS_FILE, write_bundle_json, write_entity_csv, write_export, write_json,
};
