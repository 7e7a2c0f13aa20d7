//! Errors at the host key boundary.

use thiserror::Error;

/// Errors that can occur when mapping raw key characters to inputs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    #[error("key '{0}' has no keypad meaning. Expected a digit, '.', an operation symbol, '=', 'c', or backspace")]
    UnknownKey(char),
}
