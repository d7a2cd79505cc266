//! Heuristic minimal learner
//!
//! Covers the positives one at a time. For the first uncovered positive the
//! most specific rule is built and then generalised by trying to drop each
//! condition in ascending variable order; a drop is kept when the rule still
//! matches no negative. Every emitted rule is irredundant, though not
//! necessarily the smallest rule explaining its positive.

use super::deadline::Deadline;
use crate::{Rule, State};

/// Returns the rules found and whether every positive was covered before the
/// deadline.
pub(crate) fn learn(
    variable: usize,
    value: usize,
    positives: &[State],
    negatives: &[State],
    deadline: &Deadline,
) -> (Vec<Rule>, bool) {
    let mut remaining: Vec<&State> = positives.iter().collect();
    let mut rules = Vec::new();

    while let Some(&target) = remaining.first() {
        if deadline.expired() {
            return (rules, false);
        }
        let rule = generalise(Rule::most_specific(variable, value, target), negatives);
        remaining.retain(|s| !rule.matches(s));
        rules.push(rule);
    }

    (rules, true)
}

/// Drop every condition whose removal keeps the rule clear of `negatives`
fn generalise(rule: Rule, negatives: &[State]) -> Rule {
    let variables: Vec<usize> = rule.body().keys().copied().collect();
    variables.into_iter().fold(rule, |rule, variable| {
        let candidate = rule.without_condition(variable);
        if candidate.matches_any(negatives) {
            rule
        } else {
            candidate
        }
    })
}
