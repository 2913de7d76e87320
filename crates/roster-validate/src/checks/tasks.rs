//! Task sheet checks.

use roster_model::{EntityKind, Severity, Task, ValidationIssue};

use super::{duplicate_id_errors, row_issue};
use crate::parse::{is_phase_range, is_valid_json_text};

/// Duration (in phases) above which a task is noted as long.
const LONG_TASK_PHASES: i64 = 5;

/// Duplicate IDs, Duration and MaxConcurrent lower bounds.
pub fn errors(tasks: &[Task]) -> Vec<ValidationIssue> {
    let mut issues = duplicate_id_errors(
        EntityKind::Task,
        "TaskID",
        tasks.iter().map(|t| t.task_id.as_str()),
    );

    for (idx, task) in tasks.iter().enumerate() {
        let row = idx + 1;
        if task.duration < 1 {
            issues.push(
                row_issue(
                    Severity::Error,
                    EntityKind::Task,
                    &task.task_id,
                    row,
                    "Duration",
                    format!("Duration must be >= 1 (got {})", task.duration),
                )
                .with_suggestion("Increase Duration"),
            );
        }
        if task.max_concurrent < 1 {
            issues.push(
                row_issue(
                    Severity::Error,
                    EntityKind::Task,
                    &task.task_id,
                    row,
                    "MaxConcurrent",
                    format!("MaxConcurrent must be >= 1 (got {})", task.max_concurrent),
                )
                .with_suggestion("Increase MaxConcurrent"),
            );
        }
    }

    issues
}

/// PreferredPhases that is neither JSON nor a `start-end` range.
///
/// A plain comma list such as `1,2,3` is flagged here even though
/// `normalize_preferred_phases` accepts it.
pub fn warnings(tasks: &[Task]) -> Vec<ValidationIssue> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| {
            let raw = task.preferred_phases.as_str();
            !raw.is_empty() && !is_valid_json_text(raw) && !is_phase_range(raw)
        })
        .map(|(idx, task)| {
            row_issue(
                Severity::Warning,
                EntityKind::Task,
                &task.task_id,
                idx + 1,
                "PreferredPhases",
                format!(
                    "PreferredPhases format may be invalid: {}",
                    task.preferred_phases
                ),
            )
            .with_suggestion("Use [1,2,3] or range \"1-3\"")
        })
        .collect()
}

/// Tasks spanning many phases.
pub fn info(tasks: &[Task]) -> Vec<ValidationIssue> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| task.duration > LONG_TASK_PHASES)
        .map(|(idx, task)| {
            row_issue(
                Severity::Info,
                EntityKind::Task,
                &task.task_id,
                idx + 1,
                "Duration",
                format!("Long-duration task ({})", task.duration),
            )
            .with_suggestion("Break down long task if needed")
        })
        .collect()
}
