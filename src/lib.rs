//! Tally: a pure functional four-function calculator engine
//!
//! Tally follows a "pure core, imperative shell" split. The operand and
//! operation logic is composed of pure functions with no side effects,
//! while the shell owns the one mutable instance and dispatches discrete
//! user actions to it, one at a time.
//!
//! # Core Concepts
//!
//! - **CalculatorState**: the operand/operation state machine - clear,
//!   delete, append-digit, choose-operation, compute
//! - **DisplayFormatter**: locale-grouped rendering behind the
//!   `OperandFormat` seam
//! - **Calculator**: the shell - owns the state, journals completed
//!   computations on a tape, and exposes the two display strings
//!
//! Anomalous input never fails: a second decimal point is dropped,
//! computing with nothing pending does nothing, and division by zero
//! yields a non-finite float the display renders as-is. The one explicit
//! error in the crate sits at the host key boundary.
//!
//! # Example
//!
//! ```rust
//! use tally::machine::{Calculator, Input};
//! use tally::core::Operation;
//!
//! let mut calculator = Calculator::new();
//! calculator.press(Input::Digit('2'));
//! calculator.press(Input::ChooseOperation(Operation::Add));
//! calculator.press(Input::Digit('3'));
//! calculator.press(Input::ChooseOperation(Operation::Multiply));
//! calculator.press(Input::Digit('4'));
//! calculator.press(Input::Compute);
//!
//! // Operations chain left-to-right with no precedence: (2 + 3) × 4
//! assert_eq!(calculator.readout().current, "20");
//! ```

pub mod core;
pub mod display;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{CalculatorState, EntryPhase, Operation, Tape, TapeEntry};
pub use crate::display::{DisplayFormatter, OperandFormat, Readout};
pub use crate::machine::{Calculator, Input, KeyError};
