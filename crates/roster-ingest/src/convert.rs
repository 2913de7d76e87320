//! Parse-or-default conversion from raw sheets to typed records.
//!
//! Blank or missing cells take the documented default. Integer cells that
//! fail to parse become `0`, which the validator then reports as out of
//! range, and each such case is recorded as a [`Coercion`].

use tracing::{debug, warn};

use roster_model::{Client, EntityKind, Task, Worker};

use crate::headers::HeaderMap;
use crate::sheet::RawSheet;

/// Value substituted for an unparseable integer cell.
pub const INVALID_INT: i64 = 0;

/// Default for missing integer cells.
const DEFAULT_INT: i64 = 1;

/// An integer cell that could not be read as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coercion {
    pub entity: EntityKind,
    /// 1-based data row.
    pub row: usize,
    pub field: &'static str,
    pub raw: String,
    pub value: i64,
}

/// Typed records from one sheet plus any integer coercions applied.
#[derive(Debug, Clone)]
pub struct Converted<T> {
    pub records: Vec<T>,
    pub coercions: Vec<Coercion>,
}

struct RowReader<'a> {
    kind: EntityKind,
    headers: &'a HeaderMap,
    row: &'a [String],
    row_number: usize,
    coercions: &'a mut Vec<Coercion>,
}

impl RowReader<'_> {
    fn text(&self, field: &str) -> Option<&str> {
        self.headers
            .cell(self.row, field)
            .filter(|value| !value.is_empty())
    }

    fn text_or(&self, field: &str, default: &str) -> String {
        self.text(field).unwrap_or(default).to_string()
    }

    fn id_or(&self, field: &str, prefix: char) -> String {
        self.text(field)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{prefix}{}", self.row_number))
    }

    fn int(&mut self, field: &'static str) -> i64 {
        let Some(raw) = self.text(field) else {
            return DEFAULT_INT;
        };
        if let Some(value) = parse_int(raw) {
            return value;
        }
        let raw = raw.to_string();
        self.coercions.push(Coercion {
            entity: self.kind,
            row: self.row_number,
            field,
            raw,
            value: INVALID_INT,
        });
        INVALID_INT
    }
}

/// Integers as spreadsheets write them: `3`, `+3`, `3.0`.
fn parse_int(raw: &str) -> Option<i64> {
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }
    let float = raw.parse::<f64>().ok()?;
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    let in_range = float >= i64::MIN as f64 && float < i64::MAX as f64;
    if in_range && float.fract() == 0.0 {
        Some(float as i64)
    } else {
        None
    }
}

fn convert<T, F>(kind: EntityKind, sheet: &RawSheet, mut build: F) -> Converted<T>
where
    F: FnMut(&mut RowReader<'_>) -> T,
{
    let headers = HeaderMap::build(kind, sheet);
    if !headers.unmapped().is_empty() {
        debug!(%kind, unmapped = ?headers.unmapped(), "ignoring unmapped headers");
    }
    let missing = headers.missing(kind);
    if !missing.is_empty() {
        warn!(%kind, ?missing, "sheet is missing columns, defaults will be used");
    }

    let mut coercions = Vec::new();
    let mut records = Vec::with_capacity(sheet.rows.len());
    for (idx, row) in sheet.rows.iter().enumerate() {
        let mut reader = RowReader {
            kind,
            headers: &headers,
            row,
            row_number: idx + 1,
            coercions: &mut coercions,
        };
        records.push(build(&mut reader));
    }
    Converted { records, coercions }
}

pub fn convert_clients(sheet: &RawSheet) -> Converted<Client> {
    convert(EntityKind::Client, sheet, |r| Client {
        client_id: r.id_or("ClientID", 'C'),
        client_name: r.text_or("ClientName", ""),
        priority_level: r.int("PriorityLevel"),
        requested_task_ids: r.text_or("RequestedTaskIDs", ""),
        group_tag: r.text_or("GroupTag", ""),
        attributes_json: r.text_or("AttributesJSON", "{}"),
    })
}

pub fn convert_workers(sheet: &RawSheet) -> Converted<Worker> {
    convert(EntityKind::Worker, sheet, |r| Worker {
        worker_id: r.id_or("WorkerID", 'W'),
        worker_name: r.text_or("WorkerName", ""),
        skills: r.text_or("Skills", ""),
        available_slots: r.text_or("AvailableSlots", "[]"),
        max_load_per_phase: r.int("MaxLoadPerPhase"),
        worker_group: r.text_or("WorkerGroup", ""),
        qualification_level: r.int("QualificationLevel"),
    })
}

pub fn convert_tasks(sheet: &RawSheet) -> Converted<Task> {
    convert(EntityKind::Task, sheet, |r| Task {
        task_id: r.id_or("TaskID", 'T'),
        task_name: r.text_or("TaskName", ""),
        category: r.text_or("Category", ""),
        duration: r.int("Duration"),
        required_skills: r.text_or("RequiredSkills", ""),
        preferred_phases: r.text_or("PreferredPhases", "[]"),
        max_concurrent: r.int("MaxConcurrent"),
    })
}
