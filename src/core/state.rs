//! The operand/operation state machine at the heart of the calculator.
//!
//! All operations are pure: each takes `&self` and returns the successor
//! state, leaving the original untouched. Anomalous input is absorbed as a
//! no-op rather than surfaced as an error - a second decimal point is
//! dropped, computing without a pending operation does nothing, and an
//! unparseable operand leaves the pending state intact.

use super::operation::Operation;
use super::tape::Computation;
use serde::{Deserialize, Serialize};

/// Which operand the keypad is currently filling in.
///
/// The phase is inferred rather than stored: the machine is entering the
/// second operand exactly when an operand has been captured for a pending
/// operation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntryPhase {
    /// No operation chosen yet; digits go to the first operand.
    FirstOperand,
    /// An operation is pending; digits go to the second operand.
    SecondOperand,
}

impl EntryPhase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::FirstOperand => "FirstOperand",
            Self::SecondOperand => "SecondOperand",
        }
    }
}

/// The calculator's operand/operation state.
///
/// Two text operands and an optional pending operation. The operands are
/// held as text because that is what the keypad produces: digits arrive one
/// at a time, and a computed result is stored back as text awaiting further
/// input.
///
/// Invariant: an operation is pending exactly when `previous_operand` is
/// non-empty, and `current_operand` contains at most one decimal point.
/// The fields are private so the invariant holds by construction.
///
/// # Example
///
/// ```rust
/// use tally::core::{CalculatorState, Operation};
///
/// let state = CalculatorState::new()
///     .append_digit('1')
///     .append_digit('2')
///     .choose_operation(Operation::Add)
///     .append_digit('3')
///     .compute();
///
/// assert_eq!(state.current_operand(), "15");
/// assert_eq!(state.previous_operand(), "");
/// assert!(state.operation().is_none());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    current_operand: String,
    previous_operand: String,
    operation: Option<Operation>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Create a cleared state: both operands empty, no operation pending.
    pub fn new() -> Self {
        Self {
            current_operand: String::new(),
            previous_operand: String::new(),
            operation: None,
        }
    }

    /// The operand currently being typed (pure).
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// The operand captured when the pending operation was chosen (pure).
    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    /// The pending operation, if one has been chosen (pure).
    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// Which operand the keypad is filling in (pure).
    pub fn phase(&self) -> EntryPhase {
        if self.previous_operand.is_empty() {
            EntryPhase::FirstOperand
        } else {
            EntryPhase::SecondOperand
        }
    }

    /// Reset to the initial state from anywhere.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Remove the final character of the current operand.
    ///
    /// No-op on an empty operand. Never touches the captured operand or
    /// the pending operation.
    pub fn delete_last(&self) -> Self {
        let mut next = self.clone();
        next.current_operand.pop();
        next
    }

    /// Append a digit or decimal point to the current operand.
    ///
    /// A second decimal point is dropped, as is any token that is neither
    /// an ASCII digit nor `.`. There is no length cap; the host may trim
    /// for display.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::CalculatorState;
    ///
    /// let state = CalculatorState::new()
    ///     .append_digit('1')
    ///     .append_digit('.')
    ///     .append_digit('5')
    ///     .append_digit('.');
    ///
    /// assert_eq!(state.current_operand(), "1.5");
    /// ```
    pub fn append_digit(&self, token: char) -> Self {
        if !token.is_ascii_digit() && token != '.' {
            return self.clone();
        }
        if token == '.' && self.current_operand.contains('.') {
            return self.clone();
        }
        let mut next = self.clone();
        next.current_operand.push(token);
        next
    }

    /// Choose the operation to apply to the current operand.
    ///
    /// No-op when nothing has been typed yet. When an operation is already
    /// pending, the pending computation collapses first, so operations
    /// chain left-to-right with no precedence: `2 + 3 × 4` evaluates as
    /// `(2 + 3) × 4`. The typed operand then moves into the captured slot,
    /// even when the collapse was itself a no-op.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{CalculatorState, Operation};
    ///
    /// let state = CalculatorState::new()
    ///     .append_digit('2')
    ///     .choose_operation(Operation::Add);
    ///
    /// assert_eq!(state.previous_operand(), "2");
    /// assert_eq!(state.current_operand(), "");
    /// assert_eq!(state.operation(), Some(Operation::Add));
    /// ```
    pub fn choose_operation(&self, operation: Operation) -> Self {
        if self.current_operand.is_empty() {
            return self.clone();
        }
        let collapsed = if self.previous_operand.is_empty() {
            self.clone()
        } else {
            self.compute()
        };
        Self {
            previous_operand: collapsed.current_operand,
            current_operand: String::new(),
            operation: Some(operation),
        }
    }

    /// The computation `compute` would collapse, if any (pure).
    ///
    /// `Some` exactly when an operation is pending and both operands parse
    /// as decimal numbers - the cases where `compute` changes state.
    pub fn pending_computation(&self) -> Option<Computation> {
        let operation = self.operation?;
        let lhs = self.previous_operand.parse::<f64>().ok()?;
        let rhs = self.current_operand.parse::<f64>().ok()?;
        Some(Computation {
            lhs,
            rhs,
            operation,
            result: operation.apply(lhs, rhs),
        })
    }

    /// Collapse the pending computation into the current operand.
    ///
    /// No-op when no operation is pending or either operand fails to parse;
    /// the pending state is preserved, not cleared. Otherwise the result is
    /// stored as the new current operand and the machine returns to entering
    /// the first operand. Division by zero follows `f64` semantics and
    /// produces a non-finite result rather than failing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{CalculatorState, Operation};
    ///
    /// let state = CalculatorState::new()
    ///     .append_digit('6')
    ///     .choose_operation(Operation::Divide)
    ///     .append_digit('3')
    ///     .compute();
    ///
    /// assert_eq!(state.current_operand(), "2");
    /// ```
    pub fn compute(&self) -> Self {
        match self.pending_computation() {
            Some(computation) => Self {
                current_operand: computation.result.to_string(),
                previous_operand: String::new(),
                operation: None,
            },
            None => self.clone(),
        }
    }
}
