//! Raw sheet loading.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Header row plus string cells, exactly as read from the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawSheet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file whose first non-blank row is the header.
///
/// Cells are trimmed, fully blank rows are skipped, and short rows are
/// padded so every row has one cell per header.
pub fn read_sheet(path: &Path) -> Result<RawSheet> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?;
    let sheet = read_records(reader).map_err(|source| IngestError::CsvRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        columns = sheet.headers.len(),
        rows = sheet.rows.len(),
        "read sheet"
    );
    Ok(sheet)
}

/// Parse CSV text already held in memory.
pub fn parse_sheet(contents: &str) -> std::result::Result<RawSheet, csv::Error> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(contents.as_bytes());
    read_records(reader)
}

fn read_records<R: std::io::Read>(
    mut reader: csv::Reader<R>,
) -> std::result::Result<RawSheet, csv::Error> {
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cells: Vec<String> = record.iter().map(normalize_cell).collect();
        if cells.iter().all(String::is_empty) {
            continue;
        }
        let Some(header_row) = &headers else {
            headers = Some(record.iter().map(normalize_header).collect());
            continue;
        };
        let mut row = cells;
        row.resize(header_row.len(), String::new());
        rows.push(row);
    }
    Ok(RawSheet {
        headers: headers.unwrap_or_default(),
        rows,
    })
}
