//! Validation engine over one snapshot of the three sheets.

use tracing::{debug, info, info_span};

use roster_model::{Client, Task, ValidationIssue, ValidationSummary, Worker};

use crate::checks::{clients, cross_reference, tasks, workers};

/// Runs the fixed check catalog against borrowed sheets.
///
/// The engine holds no mutable state, so `validate_all` returns the same
/// report every time it is called on the same snapshot.
#[derive(Debug, Clone, Copy)]
pub struct ValidationEngine<'a> {
    clients: &'a [Client],
    workers: &'a [Worker],
    tasks: &'a [Task],
}

impl<'a> ValidationEngine<'a> {
    pub fn new(clients: &'a [Client], workers: &'a [Worker], tasks: &'a [Task]) -> Self {
        Self {
            clients,
            workers,
            tasks,
        }
    }

    /// Run every pass and bucket the findings by severity.
    ///
    /// Order within each bucket: clients, workers, tasks, then
    /// cross-references (no cross-reference info pass exists).
    pub fn validate_all(&self) -> ValidationSummary {
        let span = info_span!(
            "validate",
            clients = self.clients.len(),
            workers = self.workers.len(),
            tasks = self.tasks.len()
        );
        let _guard = span.enter();

        let mut errors = Vec::new();
        run_pass(&mut errors, "client errors", || clients::errors(self.clients));
        run_pass(&mut errors, "worker errors", || workers::errors(self.workers));
        run_pass(&mut errors, "task errors", || tasks::errors(self.tasks));
        run_pass(&mut errors, "cross-reference errors", || {
            cross_reference::errors(self.clients, self.workers, self.tasks)
        });

        let mut warnings = Vec::new();
        run_pass(&mut warnings, "client warnings", || {
            clients::warnings(self.clients)
        });
        run_pass(&mut warnings, "worker warnings", || {
            workers::warnings(self.workers)
        });
        run_pass(&mut warnings, "task warnings", || tasks::warnings(self.tasks));
        run_pass(&mut warnings, "cross-reference warnings", || {
            cross_reference::warnings(self.workers, self.tasks)
        });

        let mut notes = Vec::new();
        run_pass(&mut notes, "client info", || clients::info(self.clients));
        run_pass(&mut notes, "worker info", || workers::info(self.workers));
        run_pass(&mut notes, "task info", || tasks::info(self.tasks));

        let summary = ValidationSummary::from_buckets(errors, warnings, notes);
        info!(
            errors = summary.total_errors(),
            warnings = summary.total_warnings(),
            info = summary.total_info(),
            "validation complete"
        );
        summary
    }
}

fn run_pass<F>(bucket: &mut Vec<ValidationIssue>, pass: &str, check: F)
where
    F: FnOnce() -> Vec<ValidationIssue>,
{
    let issues = check();
    debug!(pass, count = issues.len(), "validation pass finished");
    bucket.extend(issues);
}

/// Validate a snapshot without keeping an engine around.
pub fn validate_all(clients: &[Client], workers: &[Worker], tasks: &[Task]) -> ValidationSummary {
    ValidationEngine::new(clients, workers, tasks).validate_all()
}
