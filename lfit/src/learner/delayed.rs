//! Delayed influences
//!
//! When identical states are followed by different values of a variable, the
//! variable depends on more than the current state. The delay of a variable is
//! the number of past states needed to tell such occurrences apart, and
//! learning then runs on meta-states: the last `delay` states concatenated,
//! most recent first. In a meta-state, index `d * n + v` is variable `v` at
//! time `T-(d+1)`.

use crate::{State, Transition};

/// Number of past states `variable` depends on, as observed in `series`.
///
/// Two occurrences of the same state that lead to different values of
/// `variable` need at least two states of history; every identical
/// predecessor they share adds one more.
pub fn detect_delay(series: &[Vec<State>], variable: usize) -> usize {
    let mut delay = 1;

    for first in series {
        for i in 0..first.len().saturating_sub(1) {
            for second in series {
                for j in 0..second.len().saturating_sub(1) {
                    if first[i] != second[j]
                        || first[i + 1].get(variable) == second[j + 1].get(variable)
                    {
                        continue;
                    }

                    let mut local = 2;
                    let (mut a, mut b) = (i, j);
                    while a > 0 && b > 0 && first[a - 1] == second[b - 1] {
                        local += 1;
                        a -= 1;
                        b -= 1;
                    }
                    delay = delay.max(local);
                }
            }
        }
    }

    delay
}

/// Transitions from meta-states of `delay` states to the following state.
///
/// Steps without `delay` states of history are skipped.
pub fn meta_transitions(series: &[Vec<State>], delay: usize) -> Vec<Transition> {
    let delay = delay.max(1);
    let mut transitions = Vec::new();
    for serie in series {
        for i in delay..serie.len() {
            let history: Vec<State> = (1..=delay).map(|d| serie[i - d].clone()).collect();
            transitions.push(Transition::new(State::concat(&history), serie[i].clone()));
        }
    }
    transitions
}
