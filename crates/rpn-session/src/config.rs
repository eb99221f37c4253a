use rpn_vm::DEFAULT_CAPACITY;

/// Session configuration options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Maximum number of values the operand stack holds.
    pub stack_capacity: usize,
    /// Height of the window printed by the show command.
    pub window_slots: usize,
    /// Prompt written before each line is read.
    pub prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            stack_capacity: DEFAULT_CAPACITY,
            window_slots: 8,
            prompt: "rpn> ".to_string(),
        }
    }
}
