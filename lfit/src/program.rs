//! Logic programs
//!
//! A [`LogicProgram`] is a domain plus an ordered list of rules. It is either
//! parsed from the `.lp` text format or produced by a learner, and after that
//! it is only read: there is no way to change its rules in place.

use crate::{Domain, LfitError, LfitResult, Rule, State, Transition};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Predicted next values, one set per variable
pub type Prediction = Vec<BTreeSet<usize>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicProgram {
    domain: Domain,
    rules: Vec<Rule>,
    delay: usize,
}

impl LogicProgram {
    pub fn new(domain: Domain, rules: Vec<Rule>) -> Self {
        let delay = max_delay(&domain, &rules);
        Self {
            domain,
            rules,
            delay,
        }
    }

    /// A program whose rules may look back `delay` time steps. The delay is
    /// raised if a rule refers further back.
    pub fn with_delay(domain: Domain, rules: Vec<Rule>, delay: usize) -> Self {
        let delay = delay.max(max_delay(&domain, &rules));
        Self {
            domain,
            rules,
            delay,
        }
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn variables(&self) -> &[String] {
        self.domain.variables()
    }

    pub fn values(&self) -> &[Vec<String>] {
        self.domain.values()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of past states the rules refer to (1 for ordinary programs)
    pub fn delay(&self) -> usize {
        self.delay
    }

    pub fn rules_for(&self, variable: usize, value: usize) -> impl Iterator<Item = &Rule> {
        self.rules
            .iter()
            .filter(move |r| r.head() == (variable, value))
    }

    /// Values each variable may take after `state`.
    ///
    /// Only valid for programs with delay 1; see [`LogicProgram::next_from_history`].
    pub fn next(&self, state: &State) -> LfitResult<Prediction> {
        if self.delay > 1 {
            return Err(LfitError::domain(format!(
                "program looks back {} time steps; use next_from_history with {} states",
                self.delay, self.delay
            )));
        }
        self.next_from_history(std::slice::from_ref(state))
    }

    /// Values each variable may take after `history`, most recent state first.
    pub fn next_from_history(&self, history: &[State]) -> LfitResult<Prediction> {
        if history.len() < self.delay {
            return Err(LfitError::domain(format!(
                "program looks back {} time steps but {} states were given",
                self.delay,
                history.len()
            )));
        }
        let history = &history[..self.delay];
        for state in history {
            self.domain.check_state(state)?;
        }
        let meta_state = State::concat(history);
        Ok(self.predict(&meta_state))
    }

    fn predict(&self, meta_state: &State) -> Prediction {
        let mut prediction = vec![BTreeSet::new(); self.domain.len()];
        for rule in &self.rules {
            if let Some(values) = prediction.get_mut(rule.head_variable()) {
                if rule.matches(meta_state) {
                    values.insert(rule.head_value());
                }
            }
        }
        prediction
    }

    /// Pair every state of the domain with each next state the program allows.
    ///
    /// A state produces one transition per combination of predicted values; a
    /// state with no prediction for some variable produces none.
    pub fn generate_all_transitions(&self) -> LfitResult<Vec<Transition>> {
        if self.delay > 1 {
            return Err(LfitError::domain(format!(
                "cannot enumerate single-step transitions of a program with delay {}",
                self.delay
            )));
        }
        let mut transitions = Vec::new();
        for state in self.domain.states() {
            let prediction = self.predict(&state);
            for next in successors(&prediction) {
                transitions.push(Transition::new(state.clone(), next));
            }
        }
        Ok(transitions)
    }

    /// Fraction of (state, variable) pairs of `expected` for which `predicted`
    /// yields exactly the same set of next values.
    pub fn precision(expected: &[Transition], predicted: &[Transition]) -> LfitResult<f64> {
        if expected.is_empty() {
            return Ok(1.0);
        }
        let width = expected[0].current.len();
        for t in expected.iter().chain(predicted) {
            if t.current.len() != width || t.next.len() != width {
                return Err(LfitError::domain(format!(
                    "transition {} does not have {} variables",
                    t, width
                )));
            }
        }

        let expected = group_by_state(expected);
        let predicted = group_by_state(predicted);

        let mut hits = 0usize;
        for (state, expected_values) in &expected {
            if let Some(predicted_values) = predicted.get(state) {
                hits += expected_values
                    .iter()
                    .zip(predicted_values)
                    .filter(|(e, p)| e == p)
                    .count();
            }
        }
        Ok(hits as f64 / (expected.len() * width) as f64)
    }

    /// Render in the `.lp` text format
    pub fn logic_form(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LogicProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, values) in self.domain.variables().iter().zip(self.domain.values()) {
            writeln!(f, "VAR {} {}", name, values.join(" "))?;
        }
        writeln!(f)?;
        for rule in &self.rules {
            writeln!(f, "{}", rule.logic_form(&self.domain))?;
        }
        Ok(())
    }
}

pub(crate) fn max_delay(domain: &Domain, rules: &[Rule]) -> usize {
    let width = domain.len().max(1);
    rules
        .iter()
        .filter_map(Rule::max_variable)
        .map(|v| (v / width).saturating_add(1))
        .max()
        .unwrap_or(1)
}

fn group_by_state(transitions: &[Transition]) -> BTreeMap<&State, Prediction> {
    let mut grouped: BTreeMap<&State, Prediction> = BTreeMap::new();
    for t in transitions {
        let entry = grouped
            .entry(&t.current)
            .or_insert_with(|| vec![BTreeSet::new(); t.next.len()]);
        for (values, &value) in entry.iter_mut().zip(t.next.values()) {
            values.insert(value);
        }
    }
    grouped
}

/// Cartesian product of per-variable value sets
fn successors(prediction: &Prediction) -> Vec<State> {
    let mut states: Vec<Vec<usize>> = vec![Vec::with_capacity(prediction.len())];
    for values in prediction {
        states = states
            .into_iter()
            .flat_map(|prefix| {
                values.iter().map(move |&v| {
                    let mut s = prefix.clone();
                    s.push(v);
                    s
                })
            })
            .collect();
    }
    states.into_iter().map(State::new).collect()
}
