//! Data model for roster data preparation.
//!
//! Plain records for the three sheets (clients, workers, tasks), the
//! severity-tiered validation report, and the business rules and
//! prioritization weights carried into the export bundle.

pub mod bundle;
pub mod entity;
pub mod error;
pub mod report;
pub mod rules;
pub mod weights;

pub use bundle::ExportBundle;
pub use entity::{Client, Task, Worker};
pub use error::{ModelError, Result};
pub use report::{EntityKind, ExportReadiness, Severity, ValidationIssue, ValidationSummary};
pub use rules::{BusinessRule, RuleType};
pub use weights::{Criterion, PrioritizationWeights};
