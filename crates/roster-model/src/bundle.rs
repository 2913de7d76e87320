use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Client, Task, Worker};
use crate::report::ValidationSummary;
use crate::rules::BusinessRule;
use crate::weights::PrioritizationWeights;

/// Everything handed to the downstream allocator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub generated_at: DateTime<Utc>,
    pub clients: Vec<Client>,
    pub workers: Vec<Worker>,
    pub tasks: Vec<Task>,
    pub rules: Vec<BusinessRule>,
    pub weights: PrioritizationWeights,
    pub validation_summary: ValidationSummary,
}

impl ExportBundle {
    /// Bundle stamped with the current time, no rules and equal weights.
    pub fn new(
        clients: Vec<Client>,
        workers: Vec<Worker>,
        tasks: Vec<Task>,
        validation_summary: ValidationSummary,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            clients,
            workers,
            tasks,
            rules: Vec::new(),
            weights: PrioritizationWeights::default(),
            validation_summary,
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: Vec<BusinessRule>) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: PrioritizationWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn total_records(&self) -> usize {
        self.clients.len() + self.workers.len() + self.tasks.len()
    }

    /// Enabled rules ordered by priority (stable for equal priorities).
    pub fn active_rules(&self) -> Vec<&BusinessRule> {
        let mut rules: Vec<&BusinessRule> = self.rules.iter().filter(|r| r.enabled).collect();
        rules.sort_by_key(|r| r.priority);
        rules
    }
}
