//! Validation for roster sheets.
//!
//! [`ValidationEngine`] checks clients, workers and tasks for schema
//! violations, duplicate IDs and broken cross-references, and produces a
//! [`ValidationSummary`](roster_model::ValidationSummary) with error,
//! warning and info buckets. Malformed fields become report entries; the
//! engine has no failure path of its own.

pub mod checks;
mod engine;
pub mod parse;

pub use checks::cross_reference::qualified_worker_count;
pub use engine::{ValidationEngine, validate_all};
pub use parse::{
    MAX_RANGE_LEN, is_phase_range, is_valid_json_text, normalize_preferred_phases,
    parse_json_array_of_positive_ints, parse_strict_slots, split_list,
};
