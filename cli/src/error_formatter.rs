use ariadne::{Color, Label, Report, ReportKind, Source};
use lfit::LfitError;

/// Format an LfitError with fancy terminal output using Ariadne
pub fn format_error(error: &LfitError) -> String {
    match error {
        LfitError::Parse(details) => {
            let mut output = Vec::new();

            let enhanced_message = format!(
                "Parse error: {} (at {}:{}:{})",
                details.message, details.source_id, details.span.line, details.span.col
            );

            let mut report =
                Report::build(ReportKind::Error, &details.source_id, details.span.start)
                    .with_message(enhanced_message)
                    .with_label(
                        Label::new((&details.source_id, details.span.start..details.span.end))
                            .with_message("")
                            .with_color(Color::Red),
                    );

            if let Some(suggestion) = &details.suggestion {
                report = report.with_help(suggestion);
            }

            match report.finish().write(
                (
                    &details.source_id,
                    Source::from(details.source_text.as_ref()),
                ),
                &mut output,
            ) {
                Ok(_) => String::from_utf8_lossy(&output).to_string(),
                Err(_) => {
                    // Fallback to simple format
                    format!("{}", error)
                }
            }
        }
        LfitError::DomainViolation { message } => format!("Domain violation: {}", message),
        LfitError::InconsistentExample {
            variable,
            value,
            state,
        } => format!(
            "Inconsistent example: state {} is both positive and negative for target x{} = {}",
            state, variable, value
        ),
        LfitError::ResourceLimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            suggestion,
        } => {
            format!(
                "Resource limit exceeded: {}\n  Limit: {}\n  Actual: {}\n  {}",
                limit_name, limit_value, actual_value, suggestion
            )
        }
        LfitError::Serialization(msg) => format!("Serialization error: {}", msg),
    }
}
