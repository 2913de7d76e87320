//! Checks spanning more than one sheet.

use std::collections::HashSet;

use roster_model::{Client, EntityKind, Severity, Task, ValidationIssue, Worker};

use super::row_issue;
use crate::parse::split_list;

/// Unknown requested task IDs and skills no worker has.
pub fn errors(clients: &[Client], workers: &[Worker], tasks: &[Task]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let task_ids: HashSet<&str> = tasks.iter().map(|t| t.task_id.as_str()).collect();
    for (idx, client) in clients.iter().enumerate() {
        for task_id in split_list(&client.requested_task_ids) {
            if task_ids.contains(task_id) {
                continue;
            }
            issues.push(
                row_issue(
                    Severity::Error,
                    EntityKind::Client,
                    &client.client_id,
                    idx + 1,
                    "RequestedTaskIDs",
                    format!("Requested TaskID {task_id} not found"),
                )
                .with_suggestion(format!("Check task ID: {task_id}")),
            );
        }
    }

    let skills = worker_skill_pool(workers);
    for (idx, task) in tasks.iter().enumerate() {
        for skill in split_list(&task.required_skills) {
            if skills.contains(skill) {
                continue;
            }
            issues.push(
                row_issue(
                    Severity::Error,
                    EntityKind::Task,
                    &task.task_id,
                    idx + 1,
                    "RequiredSkills",
                    format!("Skill {skill} missing in workers"),
                )
                .with_suggestion(format!("Add worker with skill: {skill}")),
            );
        }
    }

    issues
}

/// MaxConcurrent above the number of workers who could take the task.
pub fn warnings(workers: &[Worker], tasks: &[Task]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (idx, task) in tasks.iter().enumerate() {
        let qualified = qualified_worker_count(task, workers);
        let qualified_i64 = i64::try_from(qualified).unwrap_or(i64::MAX);
        if task.max_concurrent > qualified_i64 {
            issues.push(
                row_issue(
                    Severity::Warning,
                    EntityKind::Task,
                    &task.task_id,
                    idx + 1,
                    "MaxConcurrent",
                    format!(
                        "MaxConcurrent {} > qualified workers ({qualified})",
                        task.max_concurrent
                    ),
                )
                .with_suggestion("Reduce concurrency or hire more qualified workers"),
            );
        }
    }
    issues
}

/// Every skill any worker lists.
fn worker_skill_pool(workers: &[Worker]) -> HashSet<&str> {
    workers.iter().flat_map(|w| split_list(&w.skills)).collect()
}

/// Workers whose Skills text contains any of the task's required skills.
///
/// Matching is substring containment against the raw Skills cell, so
/// `weld` qualifies a worker listing `welding`. A task with no required
/// skills is open to every worker.
pub fn qualified_worker_count(task: &Task, workers: &[Worker]) -> usize {
    let required: Vec<&str> = split_list(&task.required_skills).collect();
    if required.is_empty() {
        return workers.len();
    }
    workers
        .iter()
        .filter(|worker| required.iter().any(|skill| worker.skills.contains(*skill)))
        .count()
}
