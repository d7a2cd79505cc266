use super::{Rule, Source};
use crate::ast::Span;
use crate::error::LfitError;
use crate::{Domain, LogicProgram, Rule as LogicRule};
use pest::iterators::{Pair, Pairs};
use std::collections::BTreeMap;

/// Variable declarations are collected first so rules may appear before the
/// `VAR` lines they refer to.
pub(crate) fn build_program(pairs: Pairs<Rule>, source: &Source) -> Result<LogicProgram, LfitError> {
    let mut declarations = Vec::new();
    let mut rule_pairs = Vec::new();

    for pair in pairs {
        if pair.as_rule() != Rule::program {
            continue;
        }
        for inner_pair in pair.into_inner() {
            match inner_pair.as_rule() {
                Rule::var_declaration => declarations.push(inner_pair),
                Rule::rule_definition => rule_pairs.push(inner_pair),
                _ => {}
            }
        }
    }

    let domain = parse_declarations(declarations, source)?;
    let rules = rule_pairs
        .into_iter()
        .map(|pair| parse_rule_definition(pair, &domain, source))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LogicProgram::new(domain, rules))
}

fn parse_declarations(pairs: Vec<Pair<Rule>>, source: &Source) -> Result<Domain, LfitError> {
    let mut variables: Vec<String> = Vec::new();
    let mut values: Vec<Vec<String>> = Vec::new();

    for pair in pairs {
        let span = Span::from_pest_span(pair.as_span());
        let mut name = None;
        let mut declared = Vec::new();

        for inner_pair in pair.into_inner() {
            match inner_pair.as_rule() {
                Rule::variable_name => name = Some(inner_pair.as_str().to_string()),
                Rule::value_name => {
                    let value = inner_pair.as_str().to_string();
                    if declared.contains(&value) {
                        return Err(source.error(
                            format!("value '{}' is declared twice", value),
                            Span::from_pest_span(inner_pair.as_span()),
                        ));
                    }
                    declared.push(value);
                }
                _ => {}
            }
        }

        let name = name.ok_or_else(|| {
            source.error("Grammar error: var_declaration missing variable_name", span.clone())
        })?;
        if variables.contains(&name) {
            return Err(source.error(format!("variable '{}' is declared twice", name), span));
        }
        variables.push(name);
        values.push(declared);
    }

    Domain::new(variables, values)
}

fn parse_rule_definition(
    pair: Pair<Rule>,
    domain: &Domain,
    source: &Source,
) -> Result<LogicRule, LfitError> {
    let span = Span::from_pest_span(pair.as_span());
    let mut head = None;
    let mut body = BTreeMap::new();

    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::head => head = Some(parse_atom(inner_pair, domain, source)?),
            Rule::body => {
                for condition in inner_pair.into_inner() {
                    let condition_span = Span::from_pest_span(condition.as_span());
                    let (variable, value, delay) = parse_atom(condition, domain, source)?;
                    let index = (delay - 1)
                        .checked_mul(domain.len())
                        .and_then(|i| i.checked_add(variable))
                        .ok_or_else(|| {
                            source.error(
                                format!("delay T-{} is too large", delay),
                                condition_span.clone(),
                            )
                        })?;
                    if body.insert(index, value).is_some() {
                        return Err(source.error(
                            format!(
                                "variable '{}' at T-{} is constrained twice",
                                domain.variables()[variable],
                                delay
                            ),
                            condition_span,
                        ));
                    }
                }
            }
            _ => {}
        }
    }

    let (variable, value, _) = head.ok_or_else(|| {
        source.error("Grammar error: rule_definition missing head", span.clone())
    })?;
    Ok(LogicRule::with_body(variable, value, body))
}

/// Resolve `name(value,T)` or `name(value,T-k)` to indices and a delay
/// (0 for heads)
fn parse_atom(
    pair: Pair<Rule>,
    domain: &Domain,
    source: &Source,
) -> Result<(usize, usize, usize), LfitError> {
    let span = Span::from_pest_span(pair.as_span());
    let mut variable = None;
    let mut value = None;
    let mut delay = 0;

    for inner_pair in pair.into_inner() {
        let inner_span = Span::from_pest_span(inner_pair.as_span());
        match inner_pair.as_rule() {
            Rule::variable_name => {
                let name = inner_pair.as_str();
                variable = Some(domain.variable_index(name).ok_or_else(|| {
                    source.error_with_suggestion(
                        format!("unknown variable '{}'", name),
                        inner_span,
                        format!("declare it first with: VAR {} <values>", name),
                    )
                })?);
            }
            Rule::value_name => value = Some((inner_pair.as_str(), inner_span)),
            Rule::delay => {
                delay = inner_pair.as_str().parse::<usize>().map_err(|_| {
                    source.error(
                        format!("delay '{}' is too large", inner_pair.as_str()),
                        inner_span.clone(),
                    )
                })?;
                if delay == 0 {
                    return Err(source.error_with_suggestion(
                        "rule bodies refer to past states only",
                        inner_span,
                        "use T-1 for the previous state",
                    ));
                }
            }
            _ => {}
        }
    }

    let variable = variable
        .ok_or_else(|| source.error("Grammar error: atom missing variable_name", span.clone()))?;
    let (value_name, value_span) =
        value.ok_or_else(|| source.error("Grammar error: atom missing value_name", span))?;
    let value = domain.value_index(variable, value_name).ok_or_else(|| {
        source.error_with_suggestion(
            format!(
                "'{}' is not a value of variable '{}'",
                value_name,
                domain.variables()[variable]
            ),
            value_span,
            format!("expected one of: {}", domain.values()[variable].join(", ")),
        )
    })?;

    Ok((variable, value, delay))
}
