use super::{Rule, Source};
use crate::ast::Span;
use crate::error::LfitError;
use crate::{Domain, LfitResult, State, Transition};
use pest::iterators::{Pair, Pairs};

/// A parsed transition table: variable names from the current-state columns
/// and the transitions in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    pub variables: Vec<String>,
    pub transitions: Vec<Transition>,
}

impl TransitionTable {
    /// Domain named after the header, where each variable takes the values
    /// `0..=m` with `m` the largest value observed for it
    pub fn infer_domain(&self) -> LfitResult<Domain> {
        let mut sizes = vec![1usize; self.variables.len()];
        for t in &self.transitions {
            for state in [&t.current, &t.next] {
                for (size, &value) in sizes.iter_mut().zip(state.values()) {
                    *size = (*size).max(value + 1);
                }
            }
        }
        Domain::with_sizes(self.variables.iter().cloned().zip(sizes))
    }
}

pub(crate) fn build_table(pairs: Pairs<Rule>, source: &Source) -> Result<TransitionTable, LfitError> {
    let mut width = 0;
    let mut variables = Vec::new();
    let mut transitions = Vec::new();

    for pair in pairs {
        if pair.as_rule() != Rule::table {
            continue;
        }
        for inner_pair in pair.into_inner() {
            match inner_pair.as_rule() {
                Rule::header => {
                    variables = parse_header(inner_pair, source)?;
                    width = variables.len();
                }
                Rule::row => transitions.push(parse_row(inner_pair, width, source)?),
                _ => {}
            }
        }
    }

    Ok(TransitionTable {
        variables,
        transitions,
    })
}

/// Columns before `y0` describe the current state, the rest the next state
fn parse_header(pair: Pair<Rule>, source: &Source) -> Result<Vec<String>, LfitError> {
    let span = Span::from_pest_span(pair.as_span());
    let columns: Vec<String> = pair
        .into_inner()
        .filter(|p| p.as_rule() == Rule::column_name)
        .map(|p| p.as_str().trim_matches('"').to_string())
        .collect();

    let split = columns.iter().position(|c| c == "y0").ok_or_else(|| {
        source.error_with_suggestion(
            "header has no 'y0' column",
            span.clone(),
            "name the next-state columns y0, y1, ...",
        )
    })?;
    if split == 0 || columns.len() != 2 * split {
        return Err(source.error(
            format!(
                "header has {} current-state columns but {} next-state columns",
                split,
                columns.len() - split
            ),
            span,
        ));
    }

    Ok(columns[..split].to_vec())
}

fn parse_row(pair: Pair<Rule>, width: usize, source: &Source) -> Result<Transition, LfitError> {
    let span = Span::from_pest_span(pair.as_span());
    let mut values = Vec::with_capacity(2 * width);
    for field in pair.into_inner() {
        let value = field.as_str().parse::<usize>().map_err(|_| {
            source.error(
                format!("value '{}' is too large", field.as_str()),
                Span::from_pest_span(field.as_span()),
            )
        })?;
        values.push(value);
    }

    if values.len() != 2 * width {
        return Err(source.error(
            format!(
                "row has {} fields but the header declares {}",
                values.len(),
                2 * width
            ),
            span,
        ));
    }

    let next = values.split_off(width);
    Ok(Transition::new(State::new(values), State::new(next)))
}
