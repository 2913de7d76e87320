pub mod config;
pub mod convert;
pub mod discovery;
pub mod error;
pub mod headers;
pub mod sheet;

pub use config::{DEFAULT_CONFIG_FILE, ProjectConfig, load_project_config, resolve_project_config};
pub use convert::{Coercion, Converted, INVALID_INT, convert_clients, convert_tasks, convert_workers};
pub use discovery::{SheetPaths, classify_sheet, discover_sheets, list_csv_files};
pub use error::{IngestError, Result};
pub use headers::{HeaderMap, canonical_field, fields_for};
pub use sheet::{RawSheet, parse_sheet, read_sheet};


use tracing::info;

use roster_model::{Client, Task, Worker};

/// Typed records for all three sheets of a data folder.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub clients: Vec<Client>,
    pub workers: Vec<Worker>,
    pub tasks: Vec<Task>,
    pub coercions: Vec<Coercion>,
}

impl Snapshot {
    pub fn total_records(&self) -> usize {
        self.clients.len() + self.workers.len() + self.tasks.len()
    }
}

/// Read and convert the three sheets found by [`discover_sheets`].
pub fn load_snapshot(paths: &SheetPaths) -> Result<Snapshot> {
    let clients = convert_clients(&read_sheet(&paths.clients)?);
    let workers = convert_workers(&read_sheet(&paths.workers)?);
    let tasks = convert_tasks(&read_sheet(&paths.tasks)?);

    let mut coercions = clients.coercions;
    coercions.extend(workers.coercions);
    coercions.extend(tasks.coercions);

    let snapshot = Snapshot {
        clients: clients.records,
        workers: workers.records,
        tasks: tasks.records,
        coercions,
    };
    info!(
        clients = snapshot.clients.len(),
        workers = snapshot.workers.len(),
        tasks = snapshot.tasks.len(),
        coercions = snapshot.coercions.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}
