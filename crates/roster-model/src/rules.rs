//! Business rules authored over the loaded data.
//!
//! Rules are data only. They travel with the export bundle for the
//! downstream allocator and are never evaluated here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ModelError;

/// Kind of business rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleType {
    /// Tasks that must run together.
    CoRun,
    /// Restrict slots for a group.
    SlotRestriction,
    /// Limit load per phase for a group.
    LoadLimit,
    /// Restrict tasks to specific phases.
    PhaseWindow,
    /// Apply a rule to records matching a pattern.
    PatternMatch,
    /// Override the default precedence.
    PrecedenceOverride,
}

impl RuleType {
    pub const fn all() -> &'static [Self] {
        &[
            Self::CoRun,
            Self::SlotRestriction,
            Self::LoadLimit,
            Self::PhaseWindow,
            Self::PatternMatch,
            Self::PrecedenceOverride,
        ]
    }

    /// Identifier used in config files and exports.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::CoRun => "coRun",
            Self::SlotRestriction => "slotRestriction",
            Self::LoadLimit => "loadLimit",
            Self::PhaseWindow => "phaseWindow",
            Self::PatternMatch => "patternMatch",
            Self::PrecedenceOverride => "precedenceOverride",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::CoRun => "Co-Run",
            Self::SlotRestriction => "Slot Restriction",
            Self::LoadLimit => "Load Limit",
            Self::PhaseWindow => "Phase Window",
            Self::PatternMatch => "Pattern Match",
            Self::PrecedenceOverride => "Precedence Override",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::CoRun => "Tasks that must run together",
            Self::SlotRestriction => "Restrict slots for groups",
            Self::LoadLimit => "Limit load per phase for groups",
            Self::PhaseWindow => "Restrict tasks to specific phases",
            Self::PatternMatch => "Apply rules based on patterns",
            Self::PrecedenceOverride => "Override default precedence",
        }
    }
}

impl FromStr for RuleType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|rule_type| rule_type.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownRuleType(trimmed.to_string()))
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A user-defined business rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRule {
    pub id: String,
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Rule parameters, shape depends on `rule_type`.
    #[serde(default = "empty_config")]
    pub config: Value,
    /// Lower numbers are applied first.
    pub priority: u32,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl BusinessRule {
    pub fn new(id: impl Into<String>, rule_type: RuleType, priority: u32) -> Self {
        Self {
            id: id.into(),
            rule_type,
            name: "New Rule".to_string(),
            description: String::new(),
            config: empty_config(),
            priority,
            enabled: true,
        }
    }
}

fn empty_config() -> Value {
    Value::Object(serde_json::Map::new())
}

fn default_enabled() -> bool {
    true
}
