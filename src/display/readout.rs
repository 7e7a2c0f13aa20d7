//! The two display strings a calculator host renders.

use crate::core::CalculatorState;
use crate::display::formatter::OperandFormat;

/// Snapshot of the display regions for one state.
///
/// `current` is the formatted operand being typed. `previous` is the
/// formatted captured operand suffixed with the pending operation's symbol,
/// or empty when no operation is pending.
///
/// # Example
///
/// ```rust
/// use tally::core::{CalculatorState, Operation};
/// use tally::display::{DisplayFormatter, Readout};
///
/// let state = CalculatorState::new()
///     .append_digit('1')
///     .append_digit('2')
///     .choose_operation(Operation::Add)
///     .append_digit('3');
///
/// let readout = Readout::of(&state, &DisplayFormatter::new());
/// assert_eq!(readout.previous, "12 +");
/// assert_eq!(readout.current, "3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Readout {
    /// The main display region
    pub current: String,
    /// The smaller region above it showing the pending computation
    pub previous: String,
}

impl Readout {
    /// Build the display strings for a state. Pure, no side effects.
    pub fn of(state: &CalculatorState, formatter: &impl OperandFormat) -> Self {
        let current = formatter.format(state.current_operand());
        let previous = match state.operation() {
            Some(operation) => format!(
                "{} {}",
                formatter.format(state.previous_operand()),
                operation.symbol()
            ),
            None => String::new(),
        };
        Self { current, previous }
    }
}
