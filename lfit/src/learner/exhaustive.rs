//! Exhaustive learner
//!
//! Level-wise search over rule bodies ordered by size. Level `k` holds the
//! bodies of size `k` that still match a negative; each is expanded with one
//! condition on a variable above its highest constrained variable, so every
//! body is generated at most once. Bodies that match no negative are valid
//! and are never expanded; a valid body is kept when no sub-body with one
//! condition removed is also valid.
//!
//! A candidate that matches no positive is dropped, since none of its
//! extensions can match one either. Condition values are taken from the
//! positives the parent body still matches.

use super::deadline::Deadline;
use crate::{Rule, State};
use rayon::prelude::*;
use std::collections::BTreeSet;

struct Candidate {
    rule: Rule,
    /// Indices of the positives this rule matches
    covered: Vec<usize>,
}

enum Expansion {
    Minimal(Rule),
    Redundant,
    Children(Vec<Candidate>),
}

/// Returns every minimal consistent rule matching at least one positive, and
/// whether the search ran to the end before the deadline.
pub(crate) fn learn(
    variable: usize,
    value: usize,
    positives: &[State],
    negatives: &[State],
    deadline: &Deadline,
) -> (Vec<Rule>, bool) {
    if positives.is_empty() {
        return (Vec::new(), true);
    }
    let width = positives.iter().map(State::len).max().unwrap_or(0);

    let mut minimal = Vec::new();
    let mut frontier = vec![Candidate {
        rule: Rule::new(variable, value),
        covered: (0..positives.len()).collect(),
    }];

    while !frontier.is_empty() {
        if deadline.expired() {
            return (minimal, false);
        }

        let expansions: Vec<Expansion> = frontier
            .into_par_iter()
            .map(|candidate| expand(candidate, positives, negatives, width))
            .collect();

        let mut next_level = Vec::new();
        for expansion in expansions {
            match expansion {
                Expansion::Minimal(rule) => minimal.push(rule),
                Expansion::Redundant => {}
                Expansion::Children(children) => next_level.extend(children),
            }
        }
        frontier = next_level;
    }

    (minimal, true)
}

fn expand(candidate: Candidate, positives: &[State], negatives: &[State], width: usize) -> Expansion {
    if !candidate.rule.matches_any(negatives) {
        return if is_minimal(&candidate.rule, negatives) {
            Expansion::Minimal(candidate.rule)
        } else {
            Expansion::Redundant
        };
    }

    let start = candidate.rule.max_variable().map_or(0, |v| v + 1);
    let mut children = Vec::new();
    for variable in start..width {
        let values: BTreeSet<usize> = candidate
            .covered
            .iter()
            .filter_map(|&i| positives[i].get(variable))
            .collect();
        for value in values {
            let covered = candidate
                .covered
                .iter()
                .copied()
                .filter(|&i| positives[i].get(variable) == Some(value))
                .collect();
            children.push(Candidate {
                rule: candidate.rule.with_condition(variable, value),
                covered,
            });
        }
    }
    Expansion::Children(children)
}

/// A valid rule is minimal when every one-condition generalisation of it
/// matches a negative
fn is_minimal(rule: &Rule, negatives: &[State]) -> bool {
    rule.body()
        .keys()
        .all(|&variable| rule.without_condition(variable).matches_any(negatives))
}
