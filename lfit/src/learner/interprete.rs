use crate::{State, Transition};
use std::collections::HashMap;

/// Split the current states of `transitions` into positive and negative
/// examples for "`variable` takes `value` in the next state".
///
/// A state is positive when every observed successor has `value` at
/// `variable`, and negative as soon as one successor does not. Each distinct
/// current state lands in exactly one of the two lists, in the order it first
/// appears in `transitions`.
pub fn interprete(
    transitions: &[Transition],
    variable: usize,
    value: usize,
) -> (Vec<State>, Vec<State>) {
    let mut order: Vec<&State> = Vec::new();
    let mut positive: HashMap<&State, bool> = HashMap::new();

    for t in transitions {
        let reaches = t.next.get(variable) == Some(value);
        match positive.get_mut(&t.current) {
            Some(all_reach) => *all_reach &= reaches,
            None => {
                order.push(&t.current);
                positive.insert(&t.current, reaches);
            }
        }
    }

    let mut positives = Vec::new();
    let mut negatives = Vec::new();
    for state in order {
        if positive[state] {
            positives.push(state.clone());
        } else {
            negatives.push(state.clone());
        }
    }
    (positives, negatives)
}
