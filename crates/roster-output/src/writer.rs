//! File writers for the export bundle.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use roster_model::ExportBundle;

use crate::error::{OutputError, Result};

pub const CLIENTS_FILE: &str = "clients.csv";
pub const WORKERS_FILE: &str = "workers.csv";
pub const TASKS_FILE: &str = "tasks.csv";
pub const RULES_FILE: &str = "rules.json";
pub const WEIGHTS_FILE: &str = "weights.json";
pub const VALIDATION_FILE: &str = "validation.json";
pub const BUNDLE_FILE: &str = "bundle.json";

/// Paths of every file written by [`write_export`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub clients: PathBuf,
    pub workers: PathBuf,
    pub tasks: PathBuf,
    pub rules: PathBuf,
    pub weights: PathBuf,
    pub validation: PathBuf,
    pub bundle: PathBuf,
}

impl ExportPaths {
    fn in_dir(dir: &Path) -> Self {
        Self {
            clients: dir.join(CLIENTS_FILE),
            workers: dir.join(WORKERS_FILE),
            tasks: dir.join(TASKS_FILE),
            rules: dir.join(RULES_FILE),
            weights: dir.join(WEIGHTS_FILE),
            validation: dir.join(VALIDATION_FILE),
            bundle: dir.join(BUNDLE_FILE),
        }
    }

    pub fn all(&self) -> [&Path; 7] {
        [
            &self.clients,
            &self.workers,
            &self.tasks,
            &self.rules,
            &self.weights,
            &self.validation,
            &self.bundle,
        ]
    }
}

fn create_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

/// Write any serializable value as pretty JSON with a trailing newline.
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let mut writer = create_file(path)?;
    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), "wrote json");
    Ok(())
}

/// Write the full bundle as one JSON document.
pub fn write_bundle_json(bundle: &ExportBundle, path: &Path) -> Result<()> {
    write_json(bundle, path)
}

/// Write records as CSV. The header row comes from the records' serde
/// field names; an empty slice still yields an empty file.
pub fn write_entity_csv<T: Serialize>(records: &[T], path: &Path) -> Result<()> {
    let csv_err = |source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_writer(create_file(path)?);
    for record in records {
        writer.serialize(record).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = records.len(), "wrote csv");
    Ok(())
}

/// Write the cleaned sheets, rules, weights, report and full bundle into
/// `dir`, creating it when missing.
pub fn write_export(bundle: &ExportBundle, dir: &Path) -> Result<ExportPaths> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let paths = ExportPaths::in_dir(dir);

    write_entity_csv(&bundle.clients, &paths.clients)?;
    write_entity_csv(&bundle.workers, &paths.workers)?;
    write_entity_csv(&bundle.tasks, &paths.tasks)?;
    write_json(&bundle.rules, &paths.rules)?;
    write_json(&bundle.weights, &paths.weights)?;
    write_json(&bundle.validation_summary, &paths.validation)?;
    write_bundle_json(bundle, &paths.bundle)?;

    info!(
        dir = %dir.display(),
        records = bundle.total_records(),
        rules = bundle.rules.len(),
        "export written"
    );
    Ok(paths)
}
