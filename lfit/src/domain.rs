//! Variable domains
//!
//! A [`Domain`] declares the variables of a system and, for each of them, the
//! ordered list of values it may take. States refer to values by index, so a
//! value is valid for variable `v` iff it is smaller than `values[v].len()`.

use crate::{LfitError, LfitResult, State, Transition};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    variables: Vec<String>,
    values: Vec<Vec<String>>,
}

impl Domain {
    /// Build a domain, rejecting empty variable sets, empty value sets and
    /// mismatched lengths.
    pub fn new(variables: Vec<String>, values: Vec<Vec<String>>) -> LfitResult<Self> {
        if variables.is_empty() {
            return Err(LfitError::domain("the variable set is empty"));
        }
        if variables.len() != values.len() {
            return Err(LfitError::domain(format!(
                "{} variables declared but {} value lists given",
                variables.len(),
                values.len()
            )));
        }
        for (name, vals) in variables.iter().zip(&values) {
            if vals.is_empty() {
                return Err(LfitError::domain(format!(
                    "variable '{}' has no values",
                    name
                )));
            }
        }
        Ok(Self { variables, values })
    }

    /// Domain where every variable takes the integer values `0..k`
    pub fn with_sizes<S: Into<String>>(variables: impl IntoIterator<Item = (S, usize)>) -> LfitResult<Self> {
        let (names, values): (Vec<String>, Vec<Vec<String>>) = variables
            .into_iter()
            .map(|(name, size)| (name.into(), (0..size).map(|v| v.to_string()).collect()))
            .unzip();
        Self::new(names, values)
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn values(&self) -> &[Vec<String>] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn variable_name(&self, variable: usize) -> Option<&str> {
        self.variables.get(variable).map(String::as_str)
    }

    pub fn value_name(&self, variable: usize, value: usize) -> Option<&str> {
        self.values
            .get(variable)
            .and_then(|vals| vals.get(value))
            .map(String::as_str)
    }

    pub fn domain_size(&self, variable: usize) -> usize {
        self.values.get(variable).map_or(0, Vec::len)
    }

    pub fn variable_index(&self, name: &str) -> Option<usize> {
        self.variables.iter().position(|v| v == name)
    }

    pub fn value_index(&self, variable: usize, name: &str) -> Option<usize> {
        self.values.get(variable)?.iter().position(|v| v == name)
    }

    /// Number of states in the Cartesian product of all variable domains,
    /// saturating at `usize::MAX`.
    pub fn state_space_size(&self) -> usize {
        self.values
            .iter()
            .fold(1usize, |acc, vals| acc.saturating_mul(vals.len()))
    }

    pub fn check_variable(&self, variable: usize) -> LfitResult<()> {
        if variable >= self.len() {
            return Err(LfitError::domain(format!(
                "variable index {} is out of range ({} variables declared)",
                variable,
                self.len()
            )));
        }
        Ok(())
    }

    pub fn check_value(&self, variable: usize, value: usize) -> LfitResult<()> {
        self.check_variable(variable)?;
        if value >= self.domain_size(variable) {
            return Err(LfitError::domain(format!(
                "value {} is outside the domain of variable '{}' (0..{})",
                value,
                self.variables[variable],
                self.domain_size(variable)
            )));
        }
        Ok(())
    }

    /// Check that `state` has one in-domain value per variable
    pub fn check_state(&self, state: &State) -> LfitResult<()> {
        if state.len() != self.len() {
            return Err(LfitError::domain(format!(
                "state {} has {} values but the domain declares {} variables",
                state,
                state.len(),
                self.len()
            )));
        }
        for (variable, &value) in state.values().iter().enumerate() {
            self.check_value(variable, value).map_err(|_| {
                LfitError::domain(format!(
                    "state {} assigns value {} to variable '{}' whose domain is 0..{}",
                    state,
                    value,
                    self.variables[variable],
                    self.domain_size(variable)
                ))
            })?;
        }
        Ok(())
    }

    pub fn check_transitions(&self, transitions: &[Transition]) -> LfitResult<()> {
        for transition in transitions {
            self.check_state(&transition.current)?;
            self.check_state(&transition.next)?;
        }
        Ok(())
    }

    /// Every state of the domain in lexicographic order, variable 0 most
    /// significant.
    pub fn states(&self) -> StateIter<'_> {
        StateIter {
            domain: self,
            cursor: Some(vec![0; self.len()]),
        }
    }
}

/// Iterator over the Cartesian product of a domain
pub struct StateIter<'a> {
    domain: &'a Domain,
    cursor: Option<Vec<usize>>,
}

impl Iterator for StateIter<'_> {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        let current = self.cursor.take()?;
        let mut successor = current.clone();
        for variable in (0..successor.len()).rev() {
            successor[variable] += 1;
            if successor[variable] < self.domain.domain_size(variable) {
                self.cursor = Some(successor);
                break;
            }
            successor[variable] = 0;
        }
        Some(State::new(current))
    }
}
