use crate::learner::{self, Deadline, TargetRules};
use crate::parser;
use crate::{
    Algorithm, Completeness, Domain, LearnReport, LfitError, LfitResult, LogicProgram,
    ResourceLimits, State, TargetSummary, Transition,
};
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// The LFIT learning engine.
///
/// Holds the learner configuration and runs validation, per-target learning
/// and program assembly. Targets are learned in parallel unless
/// [`Engine::sequential`] is used; the output does not depend on it.
#[derive(Debug, Clone)]
pub struct Engine {
    algorithm: Algorithm,
    limits: ResourceLimits,
    parallel: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            limits: ResourceLimits::default(),
            parallel: true,
        }
    }
}

/// Examples of one target, ready to be handed to a learner
struct Target<'a> {
    variable: usize,
    value: usize,
    transitions: &'a [Transition],
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Create an engine with custom resource limits
    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Learn targets one after the other on the calling thread
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Get the current resource limits
    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    /// Learn a program whose rules reproduce `transitions`.
    ///
    /// Every variable/value pair of `domain` is a target. Input is validated
    /// before any search starts.
    pub fn learn(&self, domain: &Domain, transitions: &[Transition]) -> LfitResult<LearnReport> {
        check_domain(domain)?;
        domain.check_transitions(transitions)?;

        info!(
            variables = domain.len(),
            transitions = transitions.len(),
            algorithm = %self.algorithm,
            "learning started"
        );

        let targets: Vec<Target> = all_targets(domain)
            .map(|(variable, value)| Target {
                variable,
                value,
                transitions,
            })
            .collect();

        self.run(domain.clone(), 1, targets)
    }

    /// Learn a program with delayed influences from sequences of states.
    ///
    /// Each variable gets the smallest delay that makes the observed series
    /// deterministic for it; see [`learner::detect_delay`].
    pub fn learn_time_series(
        &self,
        domain: &Domain,
        series: &[Vec<State>],
    ) -> LfitResult<LearnReport> {
        check_domain(domain)?;
        for state in series.iter().flatten() {
            domain.check_state(state)?;
        }

        let meta: Vec<(usize, Vec<Transition>)> = (0..domain.len())
            .map(|variable| {
                let delay = learner::detect_delay(series, variable);
                debug!(variable, delay, "detected delay");
                (delay, learner::meta_transitions(series, delay))
            })
            .collect();
        let delay = meta.iter().map(|(d, _)| *d).max().unwrap_or(1);

        info!(
            variables = domain.len(),
            series = series.len(),
            delay,
            algorithm = %self.algorithm,
            "learning from time series started"
        );

        let targets: Vec<Target> = all_targets(domain)
            .map(|(variable, value)| Target {
                variable,
                value,
                transitions: &meta[variable].1,
            })
            .collect();

        self.run(domain.clone(), delay, targets)
    }

    /// Enumerate every transition of `program`, refusing domains larger than
    /// `max_enumerated_states`.
    pub fn generate_all_transitions(&self, program: &LogicProgram) -> LfitResult<Vec<Transition>> {
        let size = program.domain().state_space_size();
        if size > self.limits.max_enumerated_states {
            return Err(LfitError::ResourceLimitExceeded {
                limit_name: "max_enumerated_states".to_string(),
                limit_value: self.limits.max_enumerated_states.to_string(),
                actual_value: size.to_string(),
                suggestion: "Learn from a sampled transition table instead of the full state space"
                    .to_string(),
            });
        }
        program.generate_all_transitions()
    }

    /// Parse a program in the `.lp` text format
    pub fn parse_program(&self, code: &str, source: &str) -> LfitResult<LogicProgram> {
        parser::parse_program(code, Some(source.to_string()), &self.limits)
    }

    /// Parse a CSV transition table
    pub fn parse_transitions(&self, csv: &str, source: &str) -> LfitResult<Vec<Transition>> {
        parser::parse_transitions(csv, Some(source.to_string()), &self.limits)
    }

    fn run(&self, domain: Domain, delay: usize, targets: Vec<Target>) -> LfitResult<LearnReport> {
        let deadline = Deadline::after_ms(self.limits.max_learning_time_ms);

        let learned: Vec<(TargetRules, TargetSummary)> = if self.parallel {
            targets
                .par_iter()
                .map(|target| self.learn_target(target, &deadline))
                .collect::<LfitResult<_>>()?
        } else {
            targets
                .iter()
                .map(|target| self.learn_target(target, &deadline))
                .collect::<LfitResult<_>>()?
        };

        let mut rules = Vec::new();
        let mut summaries = Vec::with_capacity(learned.len());
        let mut unfinished = Vec::new();
        for (target, summary) in learned {
            if !target.complete {
                unfinished.push((target.variable, target.value));
            }
            rules.extend(target.rules);
            summaries.push(summary);
        }

        let completeness = if unfinished.is_empty() {
            Completeness::Complete
        } else {
            warn!(
                unfinished = unfinished.len(),
                limit_ms = ?self.limits.max_learning_time_ms,
                "learning deadline expired, returning a partial program"
            );
            Completeness::Partial { unfinished }
        };

        info!(rules = rules.len(), elapsed_ms = deadline.elapsed_ms(), "learning finished");

        Ok(LearnReport {
            program: LogicProgram::with_delay(domain, rules, delay),
            algorithm: self.algorithm,
            completeness,
            targets: summaries,
            elapsed_ms: deadline.elapsed_ms(),
        })
    }

    fn learn_target(
        &self,
        target: &Target,
        deadline: &Deadline,
    ) -> LfitResult<(TargetRules, TargetSummary)> {
        let (positives, negatives) =
            learner::interprete(target.transitions, target.variable, target.value);
        let learned = self.algorithm.learn_within(
            target.variable,
            target.value,
            &positives,
            &negatives,
            deadline,
        )?;

        debug!(
            variable = target.variable,
            value = target.value,
            positives = positives.len(),
            negatives = negatives.len(),
            rules = learned.rules.len(),
            complete = learned.complete,
            "target learned"
        );

        let summary = TargetSummary {
            variable: target.variable,
            value: target.value,
            positives: positives.len(),
            negatives: negatives.len(),
            rules: learned.rules.len(),
            complete: learned.complete,
        };
        Ok((learned, summary))
    }
}

fn check_domain(domain: &Domain) -> LfitResult<()> {
    if domain.is_empty() {
        return Err(LfitError::domain("the variable set is empty"));
    }
    Ok(())
}

fn all_targets(domain: &Domain) -> impl Iterator<Item = (usize, usize)> + '_ {
    (0..domain.len()).flat_map(move |variable| {
        (0..domain.domain_size(variable)).map(move |value| (variable, value))
    })
}
