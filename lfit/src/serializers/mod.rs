//! Serialization of transitions and programs
//!
//! - CSV for transition tables (read back by [`crate::parse_transitions`])
//! - JSON for programs and learning reports
//!
//! The `.lp` text form of a program is its `Display` implementation, see
//! [`crate::LogicProgram::logic_form`].

mod csv;
mod json;

pub use csv::transitions_to_csv;
pub use json::{program_from_json, to_json};
