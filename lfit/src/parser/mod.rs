use crate::ast::Span;
use crate::error::LfitError;
use crate::resource_limits::ResourceLimits;
use crate::{LogicProgram, Transition};
use pest::Parser;
use pest_derive::Parser;
use std::sync::Arc;

pub mod program;
pub mod transitions;

pub use transitions::TransitionTable;

#[derive(Parser)]
#[grammar = "src/parser/lfit.pest"]
pub struct LfitParser;

/// Source text and name, carried along so errors can point into the input
pub(crate) struct Source<'a> {
    pub id: &'a str,
    pub text: Arc<str>,
}

impl Source<'_> {
    pub(crate) fn error(&self, message: impl Into<String>, span: Span) -> LfitError {
        LfitError::parse(message, span, self.id, self.text.clone())
    }

    pub(crate) fn error_with_suggestion(
        &self,
        message: impl Into<String>,
        span: Span,
        suggestion: impl Into<String>,
    ) -> LfitError {
        LfitError::parse_with_suggestion(message, span, self.id, self.text.clone(), suggestion)
    }
}

/// Parse a logic program in the `.lp` text format
pub fn parse_program(
    content: &str,
    filename: Option<String>,
    limits: &ResourceLimits,
) -> Result<LogicProgram, LfitError> {
    check_size(content, limits)?;
    let filename = filename.unwrap_or_else(|| "<input>".to_string());
    let source = Source {
        id: &filename,
        text: Arc::from(content),
    };

    let pairs = LfitParser::parse(Rule::program, content)
        .map_err(|e| pest_error(e, &source))?;
    program::build_program(pairs, &source)
}

/// Parse a CSV transition table, keeping only the transitions
pub fn parse_transitions(
    content: &str,
    filename: Option<String>,
    limits: &ResourceLimits,
) -> Result<Vec<Transition>, LfitError> {
    parse_transition_table(content, filename, limits).map(|table| table.transitions)
}

/// Parse a CSV transition table along with its column names
pub fn parse_transition_table(
    content: &str,
    filename: Option<String>,
    limits: &ResourceLimits,
) -> Result<TransitionTable, LfitError> {
    check_size(content, limits)?;
    let filename = filename.unwrap_or_else(|| "<input>".to_string());
    let source = Source {
        id: &filename,
        text: Arc::from(content),
    };

    let pairs =
        LfitParser::parse(Rule::table, content).map_err(|e| pest_error(e, &source))?;
    transitions::build_table(pairs, &source)
}

fn check_size(content: &str, limits: &ResourceLimits) -> Result<(), LfitError> {
    if content.len() > limits.max_file_size_bytes {
        return Err(LfitError::ResourceLimitExceeded {
            limit_name: "max_file_size_bytes".to_string(),
            limit_value: format!(
                "{} bytes ({} MB)",
                limits.max_file_size_bytes,
                limits.max_file_size_bytes / (1024 * 1024)
            ),
            actual_value: format!(
                "{} bytes ({:.2} MB)",
                content.len(),
                content.len() as f64 / (1024.0 * 1024.0)
            ),
            suggestion: "Reduce file size or split the transitions into several tables"
                .to_string(),
        });
    }
    Ok(())
}

fn pest_error(e: pest::error::Error<Rule>, source: &Source) -> LfitError {
    let (start, end) = match e.location {
        pest::error::InputLocation::Pos(pos) => (pos, pos),
        pest::error::InputLocation::Span((start, end)) => (start, end),
    };
    let (line, col) = match e.line_col {
        pest::error::LineColLocation::Pos((line, col)) => (line, col),
        pest::error::LineColLocation::Span((line, col), (_, _)) => (line, col),
    };
    source.error(
        e.variant.message(),
        Span {
            start,
            end,
            line,
            col,
        },
    )
}
