use super::repressilator;
use crate::{Domain, LfitError, LogicProgram, Rule, State, Transition};
use std::collections::BTreeSet;

fn set(values: &[usize]) -> BTreeSet<usize> {
    values.iter().copied().collect()
}

#[test]
fn test_states_enumerate_in_lexicographic_order() {
    let domain = Domain::with_sizes([("a", 2), ("b", 3)]).unwrap();
    let states: Vec<State> = domain.states().collect();
    assert_eq!(states.len(), 6);
    assert_eq!(states[0], State::from([0, 0]));
    assert_eq!(states[1], State::from([0, 1]));
    assert_eq!(states[2], State::from([0, 2]));
    assert_eq!(states[3], State::from([1, 0]));
    assert_eq!(states[5], State::from([1, 2]));
    assert_eq!(domain.state_space_size(), 6);
}

#[test]
fn test_next_of_repressilator() {
    let program = repressilator();
    let next = program.next(&State::from([1, 1, 1])).unwrap();
    assert_eq!(next, vec![set(&[0]), set(&[0]), set(&[0])]);

    let next = program.next(&State::from([0, 1, 0])).unwrap();
    assert_eq!(next, vec![set(&[0]), set(&[1]), set(&[1])]);
}

#[test]
fn test_next_collects_every_matching_value() {
    let domain = Domain::with_sizes([("a", 2), ("b", 2)]).unwrap();
    let program = LogicProgram::new(
        domain,
        vec![
            Rule::with_body(0, 0, [(1, 0)]),
            Rule::new(0, 1),
            Rule::with_body(1, 1, [(0, 1)]),
        ],
    );
    let next = program.next(&State::from([0, 0])).unwrap();
    assert_eq!(next, vec![set(&[0, 1]), set(&[])]);
}

#[test]
fn test_next_rejects_out_of_domain_state() {
    let program = repressilator();
    let err = program.next(&State::from([0, 2, 0])).unwrap_err();
    match err {
        LfitError::DomainViolation { message } => {
            assert!(message.contains("'q'"), "message should name the variable: {}", message);
            assert!(message.contains('2'));
        }
        other => panic!("Expected domain violation, got {:?}", other),
    }

    assert!(program.next(&State::from([0, 1])).is_err());
}

#[test]
fn test_empty_program_predicts_nothing() {
    let domain = Domain::with_sizes([("a", 2), ("b", 2)]).unwrap();
    let program = LogicProgram::new(domain, vec![]);
    let next = program.next(&State::from([1, 0])).unwrap();
    assert!(next.iter().all(BTreeSet::is_empty));
    assert!(program.generate_all_transitions().unwrap().is_empty());
}

#[test]
fn test_generate_all_transitions_of_repressilator() {
    let transitions = repressilator().generate_all_transitions().unwrap();
    assert_eq!(transitions.len(), 8);
    assert_eq!(transitions[0], Transition::new([0, 0, 0], [1, 1, 1]));
    assert_eq!(transitions[7], Transition::new([1, 1, 1], [0, 0, 0]));
}

#[test]
fn test_generate_all_transitions_expands_non_determinism() {
    let domain = Domain::with_sizes([("a", 2)]).unwrap();
    let program = LogicProgram::new(
        domain,
        vec![Rule::new(0, 0), Rule::with_body(0, 1, [(0, 1)])],
    );
    let transitions = program.generate_all_transitions().unwrap();
    assert_eq!(
        transitions,
        vec![
            Transition::new([0], [0]),
            Transition::new([1], [0]),
            Transition::new([1], [1]),
        ]
    );
}

#[test]
fn test_precision_identical_sets_is_one() {
    let transitions = repressilator().generate_all_transitions().unwrap();
    let precision = LogicProgram::precision(&transitions, &transitions).unwrap();
    assert_eq!(precision, 1.0);
}

#[test]
fn test_precision_counts_variables() {
    let expected = vec![
        Transition::new([0, 0], [1, 1]),
        Transition::new([1, 1], [0, 0]),
    ];
    let predicted = vec![
        Transition::new([0, 0], [1, 0]),
        Transition::new([1, 1], [0, 0]),
    ];
    let precision = LogicProgram::precision(&expected, &predicted).unwrap();
    assert_eq!(precision, 0.75);
}

#[test]
fn test_precision_missing_state_scores_zero() {
    let expected = vec![
        Transition::new([0], [1]),
        Transition::new([1], [0]),
    ];
    let predicted = vec![Transition::new([0], [1])];
    assert_eq!(LogicProgram::precision(&expected, &predicted).unwrap(), 0.5);
}

#[test]
fn test_precision_compares_value_sets() {
    let expected = vec![Transition::new([0], [1]), Transition::new([0], [0])];
    let predicted = vec![Transition::new([0], [1])];
    assert_eq!(LogicProgram::precision(&expected, &predicted).unwrap(), 0.0);
}

#[test]
fn test_precision_of_empty_expectation() {
    assert_eq!(LogicProgram::precision(&[], &[]).unwrap(), 1.0);
}

#[test]
fn test_precision_rejects_mismatched_widths() {
    let expected = vec![Transition::new([0, 0], [1, 1])];
    let predicted = vec![Transition::new([0], [1])];
    assert!(LogicProgram::precision(&expected, &predicted).is_err());
}

#[test]
fn test_delayed_program_requires_history() {
    let domain = Domain::with_sizes([("a", 2), ("b", 2)]).unwrap();
    // a(1,T) :- b(1,T-2).
    let program = LogicProgram::new(domain, vec![Rule::with_body(0, 1, [(3, 1)])]);
    assert_eq!(program.delay(), 2);
    assert!(program.next(&State::from([0, 0])).is_err());
    assert!(program.generate_all_transitions().is_err());

    let history = [State::from([0, 0]), State::from([0, 1])];
    let next = program.next_from_history(&history).unwrap();
    assert_eq!(next, vec![set(&[1]), set(&[])]);
}
