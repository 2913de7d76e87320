//! Client sheet checks.

use std::ops::RangeInclusive;

use roster_model::{Client, EntityKind, Severity, ValidationIssue};

use super::{duplicate_id_errors, row_issue};
use crate::parse::{is_valid_json_text, split_list};

const PRIORITY_RANGE: RangeInclusive<i64> = 1..=5;

/// Priority at or above which a client counts as high priority.
const HIGH_PRIORITY: i64 = 4;

/// Requested task count above which a high-priority client is noted.
const BUSY_CLIENT_TASKS: usize = 5;

/// Duplicate IDs, PriorityLevel range, AttributesJSON syntax.
pub fn errors(clients: &[Client]) -> Vec<ValidationIssue> {
    let mut issues = duplicate_id_errors(
        EntityKind::Client,
        "ClientID",
        clients.iter().map(|c| c.client_id.as_str()),
    );

    for (idx, client) in clients.iter().enumerate() {
        let row = idx + 1;
        if !PRIORITY_RANGE.contains(&client.priority_level) {
            issues.push(
                row_issue(
                    Severity::Error,
                    EntityKind::Client,
                    &client.client_id,
                    row,
                    "PriorityLevel",
                    format!("PriorityLevel must be 1-5 (got {})", client.priority_level),
                )
                .with_suggestion("Set PriorityLevel between 1 and 5"),
            );
        }
        if !is_valid_json_text(&client.attributes_json) {
            issues.push(
                row_issue(
                    Severity::Error,
                    EntityKind::Client,
                    &client.client_id,
                    row,
                    "AttributesJSON",
                    "Invalid AttributesJSON",
                )
                .with_suggestion("Fix JSON format"),
            );
        }
    }

    issues
}

/// Blank client names.
pub fn warnings(clients: &[Client]) -> Vec<ValidationIssue> {
    clients
        .iter()
        .enumerate()
        .filter(|(_, client)| client.client_name.trim().is_empty())
        .map(|(idx, client)| {
            row_issue(
                Severity::Warning,
                EntityKind::Client,
                &client.client_id,
                idx + 1,
                "ClientName",
                "ClientName is empty",
            )
            .with_suggestion("Provide a client name")
        })
        .collect()
}

/// High-priority clients requesting many tasks.
pub fn info(clients: &[Client]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (idx, client) in clients.iter().enumerate() {
        let count = split_list(&client.requested_task_ids).count();
        if client.priority_level >= HIGH_PRIORITY && count > BUSY_CLIENT_TASKS {
            issues.push(
                row_issue(
                    Severity::Info,
                    EntityKind::Client,
                    &client.client_id,
                    idx + 1,
                    "RequestedTaskIDs",
                    format!("High-priority client with {count} tasks"),
                )
                .with_suggestion("Consider prioritizing tasks"),
            );
        }
    }
    issues
}
