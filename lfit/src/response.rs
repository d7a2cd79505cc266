use crate::{Algorithm, LogicProgram};
use serde::{Deserialize, Serialize};

/// Outcome of one learning run
///
/// Carries the learned program together with what is needed to judge it: the
/// algorithm used, per-target example counts and whether the run finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnReport {
    pub program: LogicProgram,
    pub algorithm: Algorithm,
    pub completeness: Completeness,
    pub targets: Vec<TargetSummary>,
    pub elapsed_ms: u64,
}

/// Whether every target was learned to the end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Completeness {
    Complete,
    /// The deadline expired. Rules of the listed (variable, value) targets
    /// may not cover all their positives.
    Partial { unfinished: Vec<(usize, usize)> },
}

/// Example and rule counts for one (variable, value) target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSummary {
    pub variable: usize,
    pub value: usize,
    pub positives: usize,
    pub negatives: usize,
    pub rules: usize,
    pub complete: bool,
}

impl LearnReport {
    pub fn is_complete(&self) -> bool {
        matches!(self.completeness, Completeness::Complete)
    }

    pub fn unfinished_targets(&self) -> &[(usize, usize)] {
        match &self.completeness {
            Completeness::Complete => &[],
            Completeness::Partial { unfinished } => unfinished,
        }
    }
}
