//! Load, validate and export stages shared by the CLI commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use roster_ingest::{
    ProjectConfig, SheetPaths, Snapshot, discover_sheets, load_snapshot, resolve_project_config,
};
use roster_model::{ExportBundle, ExportReadiness, ValidationSummary};
use roster_output::{ExportPaths, write_export};
use roster_validate::ValidationEngine;

/// A data folder after ingestion and validation.
#[derive(Debug)]
pub struct Prepared {
    pub data_dir: PathBuf,
    pub paths: SheetPaths,
    pub snapshot: Snapshot,
    pub config: ProjectConfig,
    pub summary: ValidationSummary,
}

impl Prepared {
    pub fn readiness(&self) -> ExportReadiness {
        self.summary.readiness(self.snapshot.total_records())
    }

    pub fn into_bundle(self) -> ExportBundle {
        ExportBundle::new(
            self.snapshot.clients,
            self.snapshot.workers,
            self.snapshot.tasks,
            self.summary,
        )
        .with_rules(self.config.rules)
        .with_weights(self.config.weights)
    }
}

/// Discover and read the sheets in `data_dir`, load the project config and
/// run the validation engine.
pub fn prepare(data_dir: &Path, config_path: Option<&Path>) -> Result<Prepared> {
    let span = info_span!("prepare", dir = %data_dir.display());
    let _guard = span.enter();

    let paths = discover_sheets(data_dir)
        .with_context(|| format!("discover sheets in {}", data_dir.display()))?;
    let snapshot = load_snapshot(&paths).context("load sheets")?;
    let config = resolve_project_config(config_path, data_dir).context("load project config")?;
    let summary =
        ValidationEngine::new(&snapshot.clients, &snapshot.workers, &snapshot.tasks).validate_all();

    Ok(Prepared {
        data_dir: data_dir.to_path_buf(),
        paths,
        snapshot,
        config,
        summary,
    })
}

/// Write the export bundle for a prepared folder.
///
/// Refuses when there is nothing to export, or when validation errors
/// remain and `allow_errors` is not set.
pub fn export(prepared: Prepared, output_dir: &Path, allow_errors: bool) -> Result<ExportPaths> {
    match prepared.readiness() {
        ExportReadiness::NoData => bail!("no records to export in {}", prepared.data_dir.display()),
        ExportReadiness::Blocked if !allow_errors => bail!(
            "export blocked by {} validation error(s); fix them or pass --allow-errors",
            prepared.summary.total_errors()
        ),
        readiness => info!(%readiness, "exporting"),
    }
    let bundle = prepared.into_bundle();
    write_export(&bundle, output_dir)
        .with_context(|| format!("write export to {}", output_dir.display()))
}
