use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown rule type: {0}")]
    UnknownRuleType(String),
    #[error("unknown prioritization criterion: {0}")]
    UnknownCriterion(String),
    #[error("weight for {criterion} must be a finite non-negative number, got {value}")]
    InvalidWeight { criterion: String, value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
