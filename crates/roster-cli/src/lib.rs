//! CLI library components for the roster sheet validator.

pub mod logging;
pub mod pipeline;
