use crate::ast::Span;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Detailed error information with source location
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub message: String,
    pub span: Span,
    pub source_id: String,
    pub source_text: Arc<str>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        write!(f, " at {}:{}:{}", self.source_id, self.span.line, self.span.col)
    }
}

/// Error types for learning, simulation and the text formats
#[derive(Debug, Clone, Error)]
pub enum LfitError {
    /// Text format error with source location
    #[error("Parse error: {0}")]
    Parse(Box<ErrorDetails>),

    /// A state, value or variable outside the declared domain
    #[error("Domain violation: {message}")]
    DomainViolation { message: String },

    /// A state was classified both positive and negative for one target
    #[error(
        "Inconsistent example: state {state} is both positive and negative for variable {variable} = {value}"
    )]
    InconsistentExample {
        variable: usize,
        value: usize,
        state: String,
    },

    #[error("Resource limit exceeded: {limit_name} (limit: {limit_value}, actual: {actual_value}). {suggestion}")]
    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
        suggestion: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl LfitError {
    /// Create a parse error with source information
    pub fn parse(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
    ) -> Self {
        Self::Parse(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: None,
        }))
    }

    /// Create a parse error with suggestion
    pub fn parse_with_suggestion(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::Parse(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: Some(suggestion.into()),
        }))
    }

    pub fn domain(message: impl Into<String>) -> Self {
        Self::DomainViolation {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for LfitError {
    fn from(err: serde_json::Error) -> Self {
        LfitError::Serialization(err.to_string())
    }
}
