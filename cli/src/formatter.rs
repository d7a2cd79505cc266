use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use lfit::{Completeness, Domain, LearnReport, LogicProgram, Prediction, Rule, State};

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// Summary of a learning run followed by the learned program
    pub fn format_report(&self, report: &LearnReport, precision: Option<f64>) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Learned {} rules with the {} learner in {} ms\n",
            report.program.rules().len(),
            report.algorithm,
            report.elapsed_ms
        ));
        if let Completeness::Partial { unfinished } = &report.completeness {
            output.push_str(&format!(
                "Warning: deadline expired, {} targets were not finished\n",
                unfinished.len()
            ));
        }
        output.push('\n');

        let domain = report.program.domain();
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Target").set_alignment(CellAlignment::Left),
            Cell::new("Positives").set_alignment(CellAlignment::Right),
            Cell::new("Negatives").set_alignment(CellAlignment::Right),
            Cell::new("Rules").set_alignment(CellAlignment::Right),
        ]));
        for target in &report.targets {
            let mut name = target_name(domain, target.variable, target.value);
            if !target.complete {
                name.push_str(" (partial)");
            }
            table.add_row(Row::from(vec![
                Cell::new(name),
                Cell::new(target.positives).set_alignment(CellAlignment::Right),
                Cell::new(target.negatives).set_alignment(CellAlignment::Right),
                Cell::new(target.rules).set_alignment(CellAlignment::Right),
            ]));
        }
        output.push_str(&table.to_string());
        output.push_str("\n\n");

        output.push_str(&report.program.logic_form());

        if let Some(precision) = precision {
            output.push_str(&format!("\nPrecision: {:.2}%\n", precision * 100.0));
        }
        output
    }

    /// Variables and rules of a program, as two tables
    pub fn format_program(&self, program: &LogicProgram) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} variables, {} rules, delay {}\n\n",
            program.variables().len(),
            program.rules().len(),
            program.delay()
        ));

        let mut variables = Table::new();
        variables.load_preset(UTF8_FULL);
        variables.set_header(Row::from(vec!["Variable", "Values"]));
        for (name, values) in program.variables().iter().zip(program.values()) {
            variables.add_row(Row::from(vec![name.clone(), values.join(" ")]));
        }
        output.push_str(&variables.to_string());
        output.push_str("\n\n");

        output.push_str(&self.format_rules(program.domain(), program.rules()));
        output.push('\n');
        output
    }

    fn format_rules(&self, domain: &Domain, rules: &[Rule]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new("Head").set_alignment(CellAlignment::Left),
            Cell::new("Body").set_alignment(CellAlignment::Left),
        ]));

        for (i, rule) in rules.iter().enumerate() {
            let text = rule.logic_form(domain);
            let text = text.trim_end_matches('.');
            let (head, body) = text.split_once(" :- ").unwrap_or((text, ""));
            table.add_row(Row::from(vec![
                Cell::new(i + 1).set_alignment(CellAlignment::Right),
                Cell::new(head),
                Cell::new(body),
            ]));
        }

        table.to_string()
    }

    /// Predicted next values per variable, using the domain's value names
    pub fn format_prediction(&self, domain: &Domain, state: &State, prediction: &Prediction) -> String {
        let mut output = format!("Next values after {}:\n", state);

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec!["Variable", "Next values"]));
        for (variable, values) in prediction.iter().enumerate() {
            let names: Vec<String> = values
                .iter()
                .map(|&v| {
                    domain
                        .value_name(variable, v)
                        .map(str::to_string)
                        .unwrap_or_else(|| v.to_string())
                })
                .collect();
            let shown = if names.is_empty() {
                "-".to_string()
            } else {
                names.join(", ")
            };
            let name = domain.variable_name(variable).unwrap_or("?").to_string();
            table.add_row(Row::from(vec![name, shown]));
        }

        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    pub fn format_workspace_summary(
        &self,
        program_stats: &[(String, usize, usize)],
    ) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Workspace contains {} programs\n\n",
            program_stats.len()
        ));
        for (path, variables, rules) in program_stats {
            output.push_str(&format!("{}: {} variables, {} rules\n", path, variables, rules));
        }
        output
    }
}

fn target_name(domain: &Domain, variable: usize, value: usize) -> String {
    format!(
        "{} = {}",
        domain.variable_name(variable).unwrap_or("?"),
        domain.value_name(variable, value).unwrap_or("?")
    )
}
