//! Sheet discovery in a data folder.

use std::path::{Path, PathBuf};

use tracing::warn;

use roster_model::EntityKind;

use crate::error::{IngestError, Result};

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Which sheet a file holds, judged by its name (`clients.csv`,
/// `Worker_List.csv`, `tasks-v2.csv`).
pub fn classify_sheet(path: &Path) -> Option<EntityKind> {
    let stem = path.file_stem()?.to_str()?.to_lowercase();
    EntityKind::all()
        .iter()
        .copied()
        .find(|kind| stem.contains(kind.label()))
}

/// One CSV path per sheet kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetPaths {
    pub clients: PathBuf,
    pub workers: PathBuf,
    pub tasks: PathBuf,
}

impl SheetPaths {
    pub fn get(&self, kind: EntityKind) -> &Path {
        match kind {
            EntityKind::Client => &self.clients,
            EntityKind::Worker => &self.workers,
            EntityKind::Task => &self.tasks,
        }
    }
}

/// Find the clients, workers and tasks sheets in `dir`.
///
/// When several files match one kind, the first by name is used.
pub fn discover_sheets(dir: &Path) -> Result<SheetPaths> {
    let files = list_csv_files(dir)?;
    let mut found: [Option<PathBuf>; 3] = [None, None, None];
    for path in files {
        let Some(kind) = classify_sheet(&path) else {
            continue;
        };
        let index = kind_index(kind);
        if let Some(existing) = &found[index] {
            warn!(
                %kind,
                using = %existing.display(),
                ignored = %path.display(),
                "multiple sheets match"
            );
            continue;
        }
        found[index] = Some(path);
    }
    let [clients, workers, tasks] = found;
    let missing = |kind| IngestError::MissingSheet {
        kind,
        dir: dir.to_path_buf(),
    };
    Ok(SheetPaths {
        clients: clients.ok_or_else(|| missing(EntityKind::Client))?,
        workers: workers.ok_or_else(|| missing(EntityKind::Worker))?,
        tasks: tasks.ok_or_else(|| missing(EntityKind::Task))?,
    })
}

fn kind_index(kind: EntityKind) -> usize {
    match kind {
        EntityKind::Client => 0,
        EntityKind::Worker => 1,
        EntityKind::Task => 2,
    }
}
