//! Validation report types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Hard invariant violation, blocks export.
    Error,
    /// Usable but likely suboptimal data.
    Warning,
    /// Advisory observation.
    Info,
}

impl Severity {
    /// Parse severity from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which sheet an issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Client,
    Worker,
    Task,
}

impl EntityKind {
    pub const fn all() -> &'static [Self] {
        &[Self::Client, Self::Worker, Self::Task]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Worker => "worker",
            Self::Task => "task",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single finding produced by the validation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub severity: Severity,
    /// Human-readable message describing the issue.
    pub message: String,
    pub entity: EntityKind,
    /// ID of the offending record (or the duplicated ID value).
    pub entity_id: String,
    /// Column name, when the issue is tied to one field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// 1-based row position in the input sheet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    /// Remediation hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    pub fn new(
        severity: Severity,
        entity: EntityKind,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            entity,
            entity_id: entity_id.into(),
            field: None,
            row: None,
            suggestion: None,
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Severity-bucketed validation report.
///
/// Entries keep the order in which checks produced them. Totals always
/// equal the bucket lengths because the only constructor derives them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    total_errors: usize,
    total_warnings: usize,
    total_info: usize,
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
    info: Vec<ValidationIssue>,
}

impl ValidationSummary {
    pub fn from_buckets(
        errors: Vec<ValidationIssue>,
        warnings: Vec<ValidationIssue>,
        info: Vec<ValidationIssue>,
    ) -> Self {
        Self {
            total_errors: errors.len(),
            total_warnings: warnings.len(),
            total_info: info.len(),
            errors,
            warnings,
            info,
        }
    }

    pub fn total_errors(&self) -> usize {
        self.total_errors
    }

    pub fn total_warnings(&self) -> usize {
        self.total_warnings
    }

    pub fn total_info(&self) -> usize {
        self.total_info
    }

    pub fn errors(&self) -> &[ValidationIssue] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ValidationIssue] {
        &self.warnings
    }

    pub fn info(&self) -> &[ValidationIssue] {
        &self.info
    }

    /// Errors block export and downstream allocation.
    pub fn has_errors(&self) -> bool {
        self.total_errors > 0
    }

    pub fn is_clean(&self) -> bool {
        self.total_errors == 0 && self.total_warnings == 0 && self.total_info == 0
    }

    /// All entries: errors, then warnings, then info.
    pub fn issues(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .chain(self.info.iter())
    }

    pub fn for_entity(&self, kind: EntityKind) -> impl Iterator<Item = &ValidationIssue> {
        self.issues().filter(move |issue| issue.entity == kind)
    }

    pub fn for_entity_id<'a>(
        &'a self,
        kind: EntityKind,
        entity_id: &'a str,
    ) -> impl Iterator<Item = &'a ValidationIssue> {
        self.for_entity(kind)
            .filter(move |issue| issue.entity_id == entity_id)
    }

    /// Export status given the number of loaded records.
    pub fn readiness(&self, total_records: usize) -> ExportReadiness {
        if total_records == 0 {
            ExportReadiness::NoData
        } else if self.has_errors() {
            ExportReadiness::Blocked
        } else if self.total_warnings > 0 {
            ExportReadiness::ReadyWithWarnings
        } else {
            ExportReadiness::Ready
        }
    }
}

/// Whether a validated snapshot may be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportReadiness {
    NoData,
    Blocked,
    ReadyWithWarnings,
    Ready,
}

impl ExportReadiness {
    pub fn can_export(&self) -> bool {
        matches!(self, Self::Ready | Self::ReadyWithWarnings)
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::NoData => "No data to export",
            Self::Blocked => "Validation errors found",
            Self::ReadyWithWarnings => "Ready to export (with warnings)",
            Self::Ready => "Ready to export",
        }
    }
}

impl fmt::Display for ExportReadiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
