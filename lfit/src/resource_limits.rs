/// Resource limits for parsing, enumeration and learning
///
/// The defaults are generous enough for every benchmark system while keeping
/// accidental blow-ups (a huge table, a domain with billions of states) from
/// exhausting memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLimits {
    /// Maximum size of a parsed `.lp` or CSV input in bytes
    pub max_file_size_bytes: usize,

    /// Maximum number of states `Engine::generate_all_transitions` enumerates
    pub max_enumerated_states: usize,

    /// Wall-clock bound on one learning run. `None` learns to completion.
    /// When the bound is hit the run stops and its report is marked partial.
    pub max_learning_time_ms: Option<u64>,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024, // 5 MB
            max_enumerated_states: 1 << 20,
            max_learning_time_ms: None,
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_learning_time_ms(mut self, ms: u64) -> Self {
        self.max_learning_time_ms = Some(ms);
        self
    }
}
