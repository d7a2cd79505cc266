mod error_formatter;
mod formatter;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use formatter::Formatter;
use lfit::{Algorithm, Domain, Engine, LogicProgram, ResourceLimits, State, Transition};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "lfit")]
#[command(about = "Learn logic programs from state transitions.")]
#[command(
    long_about = "LFIT learns the dynamics of discrete systems as logic programs.\nThe CLI learns programs from .lp benchmarks or CSV transition tables, simulates them, and measures how well a program reproduces observed transitions."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Learn a logic program from transitions
    ///
    /// INPUT is either a .lp program, whose full transition set is generated
    /// and learned from, or a CSV transition table.
    Learn {
        /// A .lp program or a .csv transition table
        input: PathBuf,
        /// Program whose VAR declarations give the domain of a CSV table
        ///
        /// Without it the domain is inferred from the table: variables are
        /// named after the header and take the values 0..=max observed.
        #[arg(short = 'd', long)]
        domain: Option<PathBuf>,
        /// Learner to use: heuristic or exhaustive
        #[arg(short = 'a', long, default_value = "heuristic")]
        algorithm: Algorithm,
        /// Stop learning after this many milliseconds and report a partial program
        #[arg(short = 't', long = "timeout-ms")]
        timeout_ms: Option<u64>,
        /// Output the learning report as JSON
        #[arg(long)]
        json: bool,
        /// Also print the learned prediction for this state (format: 1,0,1)
        #[arg(short = 's', long)]
        state: Option<String>,
    },
    /// Write every transition of a program as CSV
    Generate {
        /// The .lp program
        program: PathBuf,
        /// Output file (default: stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Show the values each variable may take next
    ///
    /// Values may be given by name or by index, e.g. on,0,1
    Next {
        /// The .lp program
        program: PathBuf,
        /// Current state (format: v1,v2,...)
        state: String,
    },
    /// Measure how well a program reproduces a transition table
    Precision {
        /// The .lp program
        program: PathBuf,
        /// The expected transitions as CSV
        table: PathBuf,
    },
    /// Show the variables and rules of a program
    Show {
        /// The .lp program
        program: PathBuf,
    },
    /// List all programs with variable and rule counts
    ///
    /// Scans a directory for .lp files.
    List {
        /// Root directory containing .lp files
        #[arg(default_value = ".")]
        root: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "lfit=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Learn {
            input,
            domain,
            algorithm,
            timeout_ms,
            json,
            state,
        } => learn_command(
            input,
            domain.as_deref(),
            *algorithm,
            *timeout_ms,
            *json,
            state.as_deref(),
        ),
        Commands::Generate { program, output } => generate_command(program, output.as_deref()),
        Commands::Next { program, state } => next_command(program, state),
        Commands::Precision { program, table } => precision_command(program, table),
        Commands::Show { program } => show_command(program),
        Commands::List { root } => list_command(root),
    };

    if let Err(e) = result {
        // Check if it's an LfitError and format it nicely, otherwise use default
        if let Some(lfit_err) = e.downcast_ref::<lfit::LfitError>() {
            eprintln!("{}", error_formatter::format_error(lfit_err));
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn learn_command(
    input: &Path,
    domain_file: Option<&Path>,
    algorithm: Algorithm,
    timeout_ms: Option<u64>,
    json: bool,
    state: Option<&str>,
) -> Result<()> {
    let mut limits = ResourceLimits::default();
    limits.max_learning_time_ms = timeout_ms;
    let engine = Engine::new().with_algorithm(algorithm).with_limits(limits);

    let (domain, transitions) = load_examples(&engine, input, domain_file)?;
    info!(transitions = transitions.len(), "examples loaded");

    let report = engine.learn(&domain, &transitions)?;

    if json {
        println!("{}", lfit::to_json(&report)?);
        return Ok(());
    }

    // Precision needs the full state space, skip it when that is too large
    let precision = match engine.generate_all_transitions(&report.program) {
        Ok(predicted) => Some(LogicProgram::precision(&transitions, &predicted)?),
        Err(lfit::LfitError::ResourceLimitExceeded { .. }) => None,
        Err(e) => return Err(e.into()),
    };

    let formatter = Formatter::default();
    print!("{}", formatter.format_report(&report, precision));

    if let Some(state) = state {
        let state = parse_state(report.program.domain(), state)?;
        let prediction = report.program.next(&state)?;
        println!();
        print!(
            "{}",
            formatter.format_prediction(report.program.domain(), &state, &prediction)
        );
    }

    Ok(())
}

/// Read the domain and the transitions to learn from
fn load_examples(
    engine: &Engine,
    input: &Path,
    domain_file: Option<&Path>,
) -> Result<(Domain, Vec<Transition>)> {
    if is_program(input) {
        let program = load_program(engine, input)?;
        let transitions = engine.generate_all_transitions(&program)?;
        return Ok((program.domain().clone(), transitions));
    }

    let source_id = input.to_string_lossy().to_string();
    let content = read(input)?;
    let table = lfit::parse_transition_table(&content, Some(source_id), engine.limits())?;

    let domain = match domain_file {
        Some(path) => load_program(engine, path)?.domain().clone(),
        None => table.infer_domain()?,
    };
    Ok((domain, table.transitions))
}

fn generate_command(program: &Path, output: Option<&Path>) -> Result<()> {
    let engine = Engine::new();
    let program = load_program(&engine, program)?;
    let transitions = engine.generate_all_transitions(&program)?;
    let csv = lfit::transitions_to_csv(&transitions);

    match output {
        Some(path) => {
            fs::write(path, csv)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {} transitions to {}", transitions.len(), path.display());
        }
        None => print!("{}", csv),
    }
    Ok(())
}

fn next_command(program: &Path, state: &str) -> Result<()> {
    let engine = Engine::new();
    let program = load_program(&engine, program)?;
    let state = parse_state(program.domain(), state)?;
    let prediction = program.next(&state)?;

    let formatter = Formatter::default();
    print!(
        "{}",
        formatter.format_prediction(program.domain(), &state, &prediction)
    );
    Ok(())
}

fn precision_command(program: &Path, table: &Path) -> Result<()> {
    let engine = Engine::new();
    let program = load_program(&engine, program)?;
    let expected = engine.parse_transitions(&read(table)?, &table.to_string_lossy())?;
    let predicted = engine.generate_all_transitions(&program)?;
    let precision = LogicProgram::precision(&expected, &predicted)?;

    println!("Precision: {:.2}%", precision * 100.0);
    Ok(())
}

fn show_command(program: &Path) -> Result<()> {
    let engine = Engine::new();
    let program = load_program(&engine, program)?;

    let formatter = Formatter::default();
    print!("{}", formatter.format_program(&program));
    Ok(())
}

fn list_command(root: &PathBuf) -> Result<()> {
    let engine = Engine::new();

    println!("Loading programs from {}...", root.display());

    let mut program_stats = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if is_program(entry.path()) {
            let program = load_program(&engine, entry.path())?;
            program_stats.push((
                entry.path().to_string_lossy().to_string(),
                program.variables().len(),
                program.rules().len(),
            ));
        }
    }

    println!();
    let formatter = Formatter::default();
    print!("{}", formatter.format_workspace_summary(&program_stats));

    Ok(())
}

fn is_program(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("lp")
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_program(engine: &Engine, path: &Path) -> Result<LogicProgram> {
    let source_id = path.to_string_lossy().to_string();
    Ok(engine.parse_program(&read(path)?, &source_id)?)
}

/// Parse "v1,v2,..." where each value is a value name of its variable or an
/// index into its domain
fn parse_state(domain: &Domain, input: &str) -> Result<State> {
    let fields: Vec<&str> = input.split(',').map(str::trim).collect();
    if fields.len() != domain.len() {
        bail!(
            "state '{}' has {} values but the program declares {} variables",
            input,
            fields.len(),
            domain.len()
        );
    }

    let values = fields
        .iter()
        .enumerate()
        .map(|(variable, field)| {
            domain
                .value_index(variable, field)
                .or_else(|| field.parse::<usize>().ok())
                .with_context(|| {
                    format!(
                        "'{}' is not a value of variable '{}'",
                        field,
                        domain.variable_name(variable).unwrap_or("?")
                    )
                })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(State::new(values))
}
