//! Prioritization weights handed to the downstream allocator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A prioritization criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    PriorityLevel,
    Fulfillment,
    Fairness,
    Workload,
    Efficiency,
    Cost,
}

impl Criterion {
    pub const fn all() -> &'static [Self] {
        &[
            Self::PriorityLevel,
            Self::Fulfillment,
            Self::Fairness,
            Self::Workload,
            Self::Efficiency,
            Self::Cost,
        ]
    }

    pub const fn key(&self) -> &'static str {
        match self {
            Self::PriorityLevel => "priorityLevel",
            Self::Fulfillment => "fulfillment",
            Self::Fairness => "fairness",
            Self::Workload => "workload",
            Self::Efficiency => "efficiency",
            Self::Cost => "cost",
        }
    }
}

impl FromStr for Criterion {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|criterion| criterion.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownCriterion(trimmed.to_string()))
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Relative importance of each criterion. Normalized weights sum to 1.
///
/// Missing fields deserialize from [`PrioritizationWeights::equal`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrioritizationWeights {
    pub priority_level: f64,
    pub fulfillment: f64,
    pub fairness: f64,
    pub workload: f64,
    pub efficiency: f64,
    pub cost: f64,
}

impl Default for PrioritizationWeights {
    fn default() -> Self {
        Self::equal()
    }
}

impl PrioritizationWeights {
    /// Every criterion weighted the same.
    pub fn equal() -> Self {
        let share = 1.0 / Criterion::all().len() as f64;
        Self {
            priority_level: share,
            fulfillment: share,
            fairness: share,
            workload: share,
            efficiency: share,
            cost: share,
        }
    }

    /// Favour completing high-priority client requests.
    pub fn maximize_fulfillment() -> Self {
        Self {
            priority_level: 0.4,
            fulfillment: 0.3,
            fairness: 0.2,
            workload: 0.1,
            efficiency: 0.0,
            cost: 0.0,
        }
    }

    /// Favour even workload across workers.
    pub fn fair_distribution() -> Self {
        Self {
            priority_level: 0.2,
            fulfillment: 0.2,
            fairness: 0.4,
            workload: 0.2,
            efficiency: 0.0,
            cost: 0.0,
        }
    }

    /// Favour overall throughput.
    pub fn optimize_efficiency() -> Self {
        Self {
            priority_level: 0.1,
            fulfillment: 0.1,
            fairness: 0.1,
            workload: 0.1,
            efficiency: 0.6,
            cost: 0.0,
        }
    }

    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::PriorityLevel => self.priority_level,
            Criterion::Fulfillment => self.fulfillment,
            Criterion::Fairness => self.fairness,
            Criterion::Workload => self.workload,
            Criterion::Efficiency => self.efficiency,
            Criterion::Cost => self.cost,
        }
    }

    fn slot_mut(&mut self, criterion: Criterion) -> &mut f64 {
        match criterion {
            Criterion::PriorityLevel => &mut self.priority_level,
            Criterion::Fulfillment => &mut self.fulfillment,
            Criterion::Fairness => &mut self.fairness,
            Criterion::Workload => &mut self.workload,
            Criterion::Efficiency => &mut self.efficiency,
            Criterion::Cost => &mut self.cost,
        }
    }

    pub fn total(&self) -> f64 {
        Criterion::all().iter().map(|c| self.get(*c)).sum()
    }

    /// Scale so the weights sum to 1. All-zero weights are returned as-is.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let total = self.total();
        if total <= 0.0 {
            return *self;
        }
        let mut out = *self;
        for criterion in Criterion::all() {
            *out.slot_mut(*criterion) = self.get(*criterion) / total;
        }
        out
    }

    /// Every weight must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for criterion in Criterion::all() {
            check_weight(*criterion, self.get(*criterion))?;
        }
        Ok(())
    }

    /// Set one weight, then renormalize the whole set.
    pub fn with_weight(&self, criterion: Criterion, value: f64) -> Result<Self> {
        check_weight(criterion, value)?;
        let mut out = *self;
        *out.slot_mut(criterion) = value;
        Ok(out.normalized())
    }

    /// Criteria paired with their weights, in declaration order.
    pub fn entries(&self) -> Vec<(Criterion, f64)> {
        Criterion::all().iter().map(|c| (*c, self.get(*c))).collect()
    }
}

fn check_weight(criterion: Criterion, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ModelError::InvalidWeight {
            criterion: criterion.key().to_string(),
            value: value.to_string(),
        })
    }
}
