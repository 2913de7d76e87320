//! Worker sheet checks.

use roster_model::{EntityKind, Severity, ValidationIssue, Worker};

use super::{duplicate_id_errors, row_issue};
use crate::parse::{parse_strict_slots, split_list};

/// Skill count above which a worker is flagged as a generalist.
const GENERALIST_SKILLS: usize = 5;

/// Duplicate IDs, AvailableSlots syntax, MaxLoadPerPhase lower bound.
pub fn errors(workers: &[Worker]) -> Vec<ValidationIssue> {
    let mut issues = duplicate_id_errors(
        EntityKind::Worker,
        "WorkerID",
        workers.iter().map(|w| w.worker_id.as_str()),
    );

    for (idx, worker) in workers.iter().enumerate() {
        let row = idx + 1;
        if parse_strict_slots(&worker.available_slots).is_none() {
            issues.push(
                row_issue(
                    Severity::Error,
                    EntityKind::Worker,
                    &worker.worker_id,
                    row,
                    "AvailableSlots",
                    format!("Invalid AvailableSlots: {}", worker.available_slots),
                )
                .with_suggestion("Use valid JSON array e.g., [1,2,3]"),
            );
        }
        if worker.max_load_per_phase < 1 {
            issues.push(
                row_issue(
                    Severity::Error,
                    EntityKind::Worker,
                    &worker.worker_id,
                    row,
                    "MaxLoadPerPhase",
                    format!(
                        "MaxLoadPerPhase must be >= 1 (got {})",
                        worker.max_load_per_phase
                    ),
                )
                .with_suggestion("Set MaxLoadPerPhase >= 1"),
            );
        }
    }

    issues
}

/// Fewer available slots than the per-phase load allows.
///
/// Workers whose slots fail to parse are skipped; `errors` reports them.
pub fn warnings(workers: &[Worker]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (idx, worker) in workers.iter().enumerate() {
        let Some(slots) = parse_strict_slots(&worker.available_slots) else {
            continue;
        };
        let slot_count = i64::try_from(slots.len()).unwrap_or(i64::MAX);
        if slot_count < worker.max_load_per_phase {
            issues.push(
                row_issue(
                    Severity::Warning,
                    EntityKind::Worker,
                    &worker.worker_id,
                    idx + 1,
                    "MaxLoadPerPhase",
                    format!(
                        "Worker has fewer slots ({}) than MaxLoadPerPhase ({})",
                        slots.len(),
                        worker.max_load_per_phase
                    ),
                )
                .with_suggestion("Adjust slot count or MaxLoadPerPhase"),
            );
        }
    }
    issues
}

/// Workers listing many skills.
pub fn info(workers: &[Worker]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (idx, worker) in workers.iter().enumerate() {
        let count = split_list(&worker.skills).count();
        if count > GENERALIST_SKILLS {
            issues.push(
                row_issue(
                    Severity::Info,
                    EntityKind::Worker,
                    &worker.worker_id,
                    idx + 1,
                    "Skills",
                    format!("Worker has {count} skills"),
                )
                .with_suggestion("Consider specialization"),
            );
        }
    }
    issues
}
