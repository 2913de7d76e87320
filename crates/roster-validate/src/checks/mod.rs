//! Validation passes.
//!
//! Each module owns the checks for one sheet; `cross_reference` covers
//! checks that span sheets. Every pass returns its findings in row order.

pub mod clients;
pub mod cross_reference;
pub mod tasks;
pub mod workers;

use std::collections::HashSet;

use roster_model::{EntityKind, Severity, ValidationIssue};

/// Issue tied to one field of one input row.
pub(crate) fn row_issue(
    severity: Severity,
    entity: EntityKind,
    entity_id: &str,
    row: usize,
    field: &str,
    message: impl Into<String>,
) -> ValidationIssue {
    ValidationIssue::new(severity, entity, entity_id, message)
        .with_field(field)
        .with_row(row)
}

/// Positions (0-based) of every occurrence of an ID after its first.
pub(crate) fn duplicate_positions<'a, I>(ids: I) -> Vec<(usize, &'a str)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    ids.into_iter()
        .enumerate()
        .filter(|(_, id)| !seen.insert(*id))
        .collect()
}

/// One error per repeated ID occurrence.
pub(crate) fn duplicate_id_errors<'a, I>(
    entity: EntityKind,
    field: &str,
    ids: I,
) -> Vec<ValidationIssue>
where
    I: IntoIterator<Item = &'a str>,
{
    duplicate_positions(ids)
        .into_iter()
        .map(|(idx, id)| {
            row_issue(
                Severity::Error,
                entity,
                id,
                idx + 1,
                field,
                format!("Duplicate {field}: {id}"),
            )
            .with_suggestion(format!("Use unique {field}"))
        })
        .collect()
}
