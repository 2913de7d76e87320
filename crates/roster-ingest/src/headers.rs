//! Header remapping from uploaded column names to canonical fields.
//!
//! Uploaded sheets spell headers many ways (`ClientID`, `Client ID`,
//! `client_id`). Matching compares headers with case and punctuation
//! stripped, so all of those resolve to `ClientID`.

use std::collections::BTreeMap;

use roster_model::EntityKind;

use crate::sheet::RawSheet;

pub const CLIENT_FIELDS: &[&str] = &[
    "ClientID",
    "ClientName",
    "PriorityLevel",
    "RequestedTaskIDs",
    "GroupTag",
    "AttributesJSON",
];

pub const WORKER_FIELDS: &[&str] = &[
    "WorkerID",
    "WorkerName",
    "Skills",
    "AvailableSlots",
    "MaxLoadPerPhase",
    "WorkerGroup",
    "QualificationLevel",
];

pub const TASK_FIELDS: &[&str] = &[
    "TaskID",
    "TaskName",
    "Category",
    "Duration",
    "RequiredSkills",
    "PreferredPhases",
    "MaxConcurrent",
];

/// Canonical field names for a sheet kind.
pub fn fields_for(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        EntityKind::Client => CLIENT_FIELDS,
        EntityKind::Worker => WORKER_FIELDS,
        EntityKind::Task => TASK_FIELDS,
    }
}

/// Lowercase alphanumerics only.
fn compact_key(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Resolve an uploaded header to its canonical field, if any.
pub fn canonical_field(kind: EntityKind, header: &str) -> Option<&'static str> {
    let key = compact_key(header);
    if key.is_empty() {
        return None;
    }
    fields_for(kind)
        .iter()
        .copied()
        .find(|field| compact_key(field) == key)
}

/// Column positions of a sheet keyed by canonical field.
#[derive(Debug, Clone, Default)]
pub struct HeaderMap {
    columns: BTreeMap<&'static str, usize>,
    unmapped: Vec<String>,
}

impl HeaderMap {
    /// Map a sheet's headers. The first column wins when two headers
    /// resolve to the same field.
    pub fn build(kind: EntityKind, sheet: &RawSheet) -> Self {
        let mut map = Self::default();
        for (idx, header) in sheet.headers.iter().enumerate() {
            match canonical_field(kind, header) {
                Some(field) => {
                    map.columns.entry(field).or_insert(idx);
                }
                None => map.unmapped.push(header.clone()),
            }
        }
        map
    }

    pub fn column(&self, field: &str) -> Option<usize> {
        self.columns.get(field).copied()
    }

    /// Headers that matched no canonical field.
    pub fn unmapped(&self) -> &[String] {
        &self.unmapped
    }

    /// Canonical fields absent from the sheet.
    pub fn missing(&self, kind: EntityKind) -> Vec<&'static str> {
        fields_for(kind)
            .iter()
            .copied()
            .filter(|field| !self.columns.contains_key(field))
            .collect()
    }

    /// Cell for `field` in `row`, or `None` when the column is absent.
    pub fn cell<'r>(&self, row: &'r [String], field: &str) -> Option<&'r str> {
        self.column(field)
            .and_then(|idx| row.get(idx))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spelled_variants_resolve() {
        for header in ["ClientID", "Client ID", "client_id", " CLIENT-ID "] {
            assert_eq!(
                canonical_field(EntityKind::Client, header),
                Some("ClientID"),
                "{header}"
            );
        }
        assert_eq!(canonical_field(EntityKind::Client, "WorkerID"), None);
        assert_eq!(canonical_field(EntityKind::Task, "---"), None);
    }
}
