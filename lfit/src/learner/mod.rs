//! Rule learners
//!
//! Learning a program is done target by target: for every variable and every
//! value of its domain the transitions are split into positive and negative
//! states by [`interprete`], and an [`Algorithm`] turns those examples into
//! rules. The two algorithms share one contract:
//!
//! 1. every positive is matched by at least one rule,
//! 2. no negative is matched by any rule,
//! 3. removing any condition from a rule makes it match a negative.
//!
//! [`Algorithm::HeuristicMinimal`] produces one such cover quickly.
//! [`Algorithm::Exhaustive`] produces every minimal rule that matches a
//! positive.

pub mod deadline;
pub mod delayed;
pub mod exhaustive;
pub mod heuristic;
pub mod interprete;

pub use deadline::Deadline;
pub use delayed::{detect_delay, meta_transitions};
pub use interprete::interprete;

use crate::{Domain, Engine, LfitError, LfitResult, LogicProgram, Rule, State, Transition};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Strategy used to learn the rules of one target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// One irredundant cover of the positives, built greedily
    #[default]
    HeuristicMinimal,
    /// Every minimal rule consistent with the negatives
    Exhaustive,
}

/// Rules learned for one (variable, value) target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRules {
    pub variable: usize,
    pub value: usize,
    pub rules: Vec<Rule>,
    /// False when the deadline stopped the search early
    pub complete: bool,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::HeuristicMinimal => "heuristic",
            Algorithm::Exhaustive => "exhaustive",
        }
    }

    /// Learn rules with head `variable = value` from the given examples
    pub fn learn(
        &self,
        variable: usize,
        value: usize,
        positives: &[State],
        negatives: &[State],
    ) -> LfitResult<Vec<Rule>> {
        self.learn_within(variable, value, positives, negatives, &Deadline::none())
            .map(|target| target.rules)
    }

    /// Like [`Algorithm::learn`], but gives up when `deadline` expires. The
    /// rules returned after a timeout are still consistent and minimal, they
    /// just may not cover every positive.
    pub fn learn_within(
        &self,
        variable: usize,
        value: usize,
        positives: &[State],
        negatives: &[State],
        deadline: &Deadline,
    ) -> LfitResult<TargetRules> {
        check_examples(variable, value, positives, negatives)?;

        let (rules, complete) = match self {
            Algorithm::HeuristicMinimal => {
                heuristic::learn(variable, value, positives, negatives, deadline)
            }
            Algorithm::Exhaustive => {
                exhaustive::learn(variable, value, positives, negatives, deadline)
            }
        };

        Ok(TargetRules {
            variable,
            value,
            rules,
            complete,
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = LfitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "heuristic" | "heuristic-minimal" | "pride" => Ok(Algorithm::HeuristicMinimal),
            "exhaustive" | "gula" => Ok(Algorithm::Exhaustive),
            other => Err(LfitError::domain(format!(
                "unknown algorithm '{}' (expected 'heuristic' or 'exhaustive')",
                other
            ))),
        }
    }
}

/// Learn the rules of one target with the heuristic minimal learner
pub fn fit_var_val(
    variable: usize,
    value: usize,
    positives: &[State],
    negatives: &[State],
) -> LfitResult<Vec<Rule>> {
    Algorithm::HeuristicMinimal.learn(variable, value, positives, negatives)
}

/// Learn a program reproducing `transitions` with the default engine
pub fn fit(domain: &Domain, transitions: &[Transition]) -> LfitResult<LogicProgram> {
    Engine::new()
        .learn(domain, transitions)
        .map(|report| report.program)
}

/// The target must be in range, all examples must have the same width, and
/// no state may be both positive and negative.
fn check_examples(
    variable: usize,
    value: usize,
    positives: &[State],
    negatives: &[State],
) -> LfitResult<()> {
    let mut examples = positives.iter().chain(negatives);
    if let Some(first) = examples.next() {
        if variable >= first.len() {
            return Err(LfitError::domain(format!(
                "target variable {} is out of range for examples with {} variables",
                variable,
                first.len()
            )));
        }
        if let Some(other) = examples.find(|s| s.len() != first.len()) {
            return Err(LfitError::domain(format!(
                "examples {} and {} have different numbers of variables",
                first, other
            )));
        }
    }

    let negatives: HashSet<&State> = negatives.iter().collect();
    if let Some(state) = positives.iter().find(|s| negatives.contains(s)) {
        return Err(LfitError::InconsistentExample {
            variable,
            value,
            state: state.to_string(),
        });
    }
    Ok(())
}
