use serde::{Deserialize, Serialize};
use std::fmt;

/// One assignment of a value index to every variable.
///
/// States are immutable: once built, the values cannot be changed. Two states
/// are equal when they assign the same value to every variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(Vec<usize>);

impl State {
    pub fn new(values: Vec<usize>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, variable: usize) -> Option<usize> {
        self.0.get(variable).copied()
    }

    /// Concatenate states, most recent first, into one meta-state
    pub fn concat(history: &[State]) -> State {
        State(history.iter().flat_map(|s| s.0.iter().copied()).collect())
    }
}

impl From<Vec<usize>> for State {
    fn from(values: Vec<usize>) -> Self {
        Self(values)
    }
}

impl<const N: usize> From<[usize; N]> for State {
    fn from(values: [usize; N]) -> Self {
        Self(values.to_vec())
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

/// An observed (current state, next state) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub current: State,
    pub next: State,
}

impl Transition {
    pub fn new(current: impl Into<State>, next: impl Into<State>) -> Self {
        Self {
            current: current.into(),
            next: next.into(),
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.current, self.next)
    }
}
