//! Rules
//!
//! A [`Rule`] states that variable `head_variable` takes `head_value` in the
//! next state whenever every condition of its body holds in the current state.
//! The body is a map from variable index to required value, so a rule never
//! holds two conditions on the same variable.
//!
//! Rules are values. Search code builds candidates with
//! [`Rule::with_condition`] and [`Rule::without_condition`], each of which
//! returns a new rule and leaves the original untouched.

use crate::{Domain, State};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    head_variable: usize,
    head_value: usize,
    body: BTreeMap<usize, usize>,
}

impl Rule {
    /// A rule with an empty body, which matches every state
    pub fn new(head_variable: usize, head_value: usize) -> Self {
        Self {
            head_variable,
            head_value,
            body: BTreeMap::new(),
        }
    }

    pub fn with_body(
        head_variable: usize,
        head_value: usize,
        body: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        Self {
            head_variable,
            head_value,
            body: body.into_iter().collect(),
        }
    }

    /// The most specific rule matching `state`: one condition per variable
    pub fn most_specific(head_variable: usize, head_value: usize, state: &State) -> Self {
        Self::with_body(
            head_variable,
            head_value,
            state.values().iter().copied().enumerate(),
        )
    }

    pub fn head_variable(&self) -> usize {
        self.head_variable
    }

    pub fn head_value(&self) -> usize {
        self.head_value
    }

    pub fn head(&self) -> (usize, usize) {
        (self.head_variable, self.head_value)
    }

    /// Body conditions in ascending variable order
    pub fn body(&self) -> &BTreeMap<usize, usize> {
        &self.body
    }

    pub fn size(&self) -> usize {
        self.body.len()
    }

    pub fn condition(&self, variable: usize) -> Option<usize> {
        self.body.get(&variable).copied()
    }

    pub fn has_condition(&self, variable: usize) -> bool {
        self.body.contains_key(&variable)
    }

    /// Highest variable index constrained by the body
    pub fn max_variable(&self) -> Option<usize> {
        self.body.keys().next_back().copied()
    }

    /// Copy of this rule with `variable` constrained to `value`, replacing any
    /// existing condition on that variable
    pub fn with_condition(&self, variable: usize, value: usize) -> Self {
        let mut rule = self.clone();
        rule.body.insert(variable, value);
        rule
    }

    /// Copy of this rule without a condition on `variable`
    pub fn without_condition(&self, variable: usize) -> Self {
        let mut rule = self.clone();
        rule.body.remove(&variable);
        rule
    }

    /// True iff every body condition holds in `state`.
    ///
    /// A condition on a variable the state does not have never holds.
    pub fn matches(&self, state: &State) -> bool {
        self.body
            .iter()
            .all(|(&variable, &value)| state.get(variable) == Some(value))
    }

    pub fn matches_any<'a>(&self, states: impl IntoIterator<Item = &'a State>) -> bool {
        states.into_iter().any(|s| self.matches(s))
    }

    /// True iff every state matched by `self` is matched by `other`
    pub fn is_subsumed_by(&self, other: &Rule) -> bool {
        self.head() == other.head()
            && other
                .body
                .iter()
                .all(|(variable, value)| self.body.get(variable) == Some(value))
    }

    /// Render this rule in the logic-program text format using the names of
    /// `domain`. Body variables beyond the domain width refer to earlier time
    /// steps (`T-2`, `T-3`, ...).
    pub fn logic_form(&self, domain: &Domain) -> String {
        let width = domain.len().max(1);
        let name = |variable: usize| {
            domain
                .variable_name(variable % width)
                .map(str::to_string)
                .unwrap_or_else(|| format!("x{}", variable % width))
        };
        let value = |variable: usize, value: usize| {
            domain
                .value_name(variable % width, value)
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string())
        };

        let mut out = format!(
            "{}({},T)",
            name(self.head_variable),
            value(self.head_variable, self.head_value)
        );
        if !self.body.is_empty() {
            out.push_str(" :- ");
            let conditions: Vec<String> = self
                .body
                .iter()
                .map(|(&var, &val)| {
                    format!("{}({},T-{})", name(var), value(var, val), var / width + 1)
                })
                .collect();
            out.push_str(&conditions.join(", "));
        }
        out.push('.');
        out
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}={} :- ", self.head_variable, self.head_value)?;
        for (i, (variable, value)) in self.body.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "x{}={}", variable, value)?;
        }
        write!(f, ".")
    }
}
