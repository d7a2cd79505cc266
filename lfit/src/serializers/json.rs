use crate::{LfitError, LfitResult, LogicProgram};
use serde::Serialize;

/// Serialize any model type (program, report, transitions) as pretty JSON
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> LfitResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Read a program back from JSON, re-checking its domain, rules and delay
pub fn program_from_json(json: &str) -> LfitResult<LogicProgram> {
    let program: LogicProgram = serde_json::from_str(json)?;
    let domain = program.domain();
    let checked = crate::Domain::new(domain.variables().to_vec(), domain.values().to_vec())?;

    let width = checked.len();
    for rule in program.rules() {
        checked.check_value(rule.head_variable(), rule.head_value())?;
        for (&variable, &value) in rule.body() {
            checked.check_value(variable % width, value).map_err(|e| {
                LfitError::domain(format!("in rule {}: {}", rule, e))
            })?;
        }
    }

    let required = crate::program::max_delay(&checked, program.rules());
    if program.delay() < required {
        return Err(LfitError::domain(format!(
            "program delay {} is shorter than the {} time steps its rules refer to",
            program.delay(),
            required
        )));
    }
    Ok(LogicProgram::with_delay(
        checked,
        program.rules().to_vec(),
        program.delay(),
    ))
}
