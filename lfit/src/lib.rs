//! # LFIT Engine
//!
//! **Learning From Interpretation Transitions**
//!
//! LFIT learns the dynamics of a discrete system as a logic program. Given the
//! variables of the system, the values each may take and observed
//! (state, next state) pairs, it infers for every variable/value pair the
//! minimal conjunctions of current-state conditions under which the variable
//! takes that value next.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lfit::{Engine, LfitResult, State};
//!
//! fn main() -> LfitResult<()> {
//!     let engine = Engine::new();
//!
//!     let benchmark = engine.parse_program(r#"
//!         VAR p 0 1
//!         VAR q 0 1
//!
//!         p(0,T) :- q(1,T-1).
//!         p(1,T) :- q(0,T-1).
//!         q(0,T) :- p(0,T-1).
//!         q(1,T) :- p(1,T-1).
//!     "#, "benchmark.lp")?;
//!
//!     let transitions = engine.generate_all_transitions(&benchmark)?;
//!     let report = engine.learn(benchmark.domain(), &transitions)?;
//!
//!     println!("{}", report.program.logic_form());
//!     println!("{:?}", report.program.next(&State::from([1, 1]))?);
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Rules
//! A rule `p(1,T) :- q(0,T-1).` says that `p` takes value `1` whenever `q` had
//! value `0` in the previous state. Its body is a conjunction with at most one
//! condition per variable.
//!
//! ### Learners
//! Two learners share one contract: every positive example is explained, no
//! negative example is, and no rule has a removable condition.
//! [`Algorithm::HeuristicMinimal`] builds one such cover;
//! [`Algorithm::Exhaustive`] enumerates all minimal rules.
//!
//! ### Delays
//! When the current state is not enough to explain a variable, the variable
//! is learned over several past states, see [`Engine::learn_time_series`].

pub mod ast;
pub mod domain;
pub mod engine;
pub mod error;
pub mod learner;
pub mod parser;
pub mod program;
pub mod resource_limits;
pub mod response;
pub mod rule;
pub mod serializers;
pub mod state;

pub use ast::Span;
pub use domain::Domain;
pub use engine::Engine;
pub use error::{ErrorDetails, LfitError};
pub use learner::{fit, fit_var_val, interprete, Algorithm, Deadline, TargetRules};
pub use parser::{parse_program, parse_transition_table, parse_transitions, TransitionTable};
pub use program::{LogicProgram, Prediction};
pub use resource_limits::ResourceLimits;
pub use response::{Completeness, LearnReport, TargetSummary};
pub use rule::Rule;
pub use serializers::{program_from_json, to_json, transitions_to_csv};
pub use state::{State, Transition};

/// Result type for LFIT operations
pub type LfitResult<T> = Result<T, LfitError>;

#[cfg(test)]
mod tests;
