//! Discrete actions the host dispatches to the calculator.

use super::error::KeyError;
use crate::core::Operation;

/// One discrete user action.
///
/// The host owns buttons and key events; each of them reduces to one of
/// these variants before reaching the machine.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Input {
    /// Append a digit or decimal point to the current operand
    Digit(char),
    /// Select the operation to apply
    ChooseOperation(Operation),
    /// Collapse the pending computation
    Compute,
    /// Reset the machine to its initial state
    Clear,
    /// Remove the last typed character
    DeleteLast,
}

impl Input {
    /// Map a raw key character to a calculator input.
    ///
    /// `0`-`9` and `.` type digits; `+`, `-`, `*`/`x`/`×` and `/`/`÷`
    /// choose operations; `=` computes; `c`/`C` clears; backspace and
    /// delete remove the last character. Any other key is a [`KeyError`] -
    /// the one fallible surface of the crate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::Operation;
    /// use tally::machine::Input;
    ///
    /// assert_eq!(Input::from_key('7'), Ok(Input::Digit('7')));
    /// assert_eq!(
    ///     Input::from_key('*'),
    ///     Ok(Input::ChooseOperation(Operation::Multiply))
    /// );
    /// assert!(Input::from_key('%').is_err());
    /// ```
    pub fn from_key(key: char) -> Result<Self, KeyError> {
        match key {
            '0'..='9' | '.' => Ok(Self::Digit(key)),
            '=' => Ok(Self::Compute),
            'c' | 'C' => Ok(Self::Clear),
            '\u{8}' | '\u{7f}' => Ok(Self::DeleteLast),
            _ => Operation::from_symbol(key)
                .map(Self::ChooseOperation)
                .ok_or(KeyError::UnknownKey(key)),
        }
    }
}
