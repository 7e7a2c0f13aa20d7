//! The imperative shell around the pure calculator core.
//!
//! `Calculator` owns one `CalculatorState`, one `Tape`, and a formatter.
//! Each input is handled to completion before the next - the host's event
//! dispatch serializes calls, so there is no locking and no suspension.

pub mod error;
pub mod input;

pub use error::KeyError;
pub use input::Input;

use crate::core::{CalculatorState, Tape, TapeEntry};
use crate::display::{DisplayFormatter, Readout};
use chrono::Utc;

/// Calculator driver owning the state machine, the tape, and display
/// formatting.
///
/// # Example
///
/// ```rust
/// use tally::machine::Calculator;
///
/// let mut calculator = Calculator::new();
/// calculator.press_keys("2 + 3 x 4 =")?;
///
/// assert_eq!(calculator.readout().current, "20");
/// assert_eq!(calculator.tape().len(), 2); // 2 + 3, then 5 x 4
/// # Ok::<(), tally::machine::KeyError>(())
/// ```
pub struct Calculator {
    state: CalculatorState,
    tape: Tape,
    formatter: DisplayFormatter,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator in the cleared state with default formatting.
    pub fn new() -> Self {
        Self::with_formatter(DisplayFormatter::new())
    }

    /// Create a calculator with a custom display formatter.
    pub fn with_formatter(formatter: DisplayFormatter) -> Self {
        Self {
            state: CalculatorState::new(),
            tape: Tape::new(),
            formatter,
        }
    }

    /// Get the current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Get the tape of completed computations (pure)
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Apply one input to completion.
    ///
    /// A computation that collapses - explicitly via [`Input::Compute`], or
    /// implicitly when choosing the next operation in a chain - is recorded
    /// on the tape before the state advances.
    pub fn press(&mut self, input: Input) {
        match input {
            Input::Digit(token) => self.state = self.state.append_digit(token),
            Input::ChooseOperation(operation) => {
                self.record_collapse();
                self.state = self.state.choose_operation(operation);
            }
            Input::Compute => {
                self.record_collapse();
                self.state = self.state.compute();
            }
            Input::Clear => self.state = self.state.clear(),
            Input::DeleteLast => self.state = self.state.delete_last(),
        }
    }

    /// Map a raw key character to an input and press it.
    pub fn press_key(&mut self, key: char) -> Result<(), KeyError> {
        self.press(Input::from_key(key)?);
        Ok(())
    }

    /// Press a whole key script in order, skipping whitespace.
    ///
    /// Stops at the first unmapped key; everything pressed before it has
    /// already taken effect.
    pub fn press_keys(&mut self, keys: &str) -> Result<(), KeyError> {
        for key in keys.chars() {
            if key.is_whitespace() {
                continue;
            }
            self.press_key(key)?;
        }
        Ok(())
    }

    /// The two display strings for the current state (pure)
    pub fn readout(&self) -> Readout {
        Readout::of(&self.state, &self.formatter)
    }

    fn record_collapse(&mut self) {
        if let Some(computation) = self.state.pending_computation() {
            self.tape = self.tape.record(TapeEntry {
                computation,
                timestamp: Utc::now(),
            });
        }
    }
}
