//! The four binary operations a calculator keypad offers.
//!
//! Operations are plain values. Applying one is pure arithmetic over `f64`
//! with standard IEEE-754 semantics, so division by zero yields an infinite
//! or NaN result instead of failing.

use serde::{Deserialize, Serialize};

/// A binary arithmetic operation selected on the keypad.
///
/// # Example
///
/// ```rust
/// use tally::core::Operation;
///
/// let op = Operation::Divide;
/// assert_eq!(op.symbol(), '÷');
/// assert_eq!(op.apply(6.0, 3.0), 2.0);
///
/// // Division by zero is not an error
/// assert!(op.apply(5.0, 0.0).is_infinite());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Get the operation's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
        }
    }

    /// The character shown next to the captured operand while this
    /// operation is pending.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Apply the operation to two operands.
    ///
    /// Pure `f64` arithmetic. Non-finite results (division by zero,
    /// overflow) are returned as-is.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }

    /// Look up the operation for a keypad symbol.
    ///
    /// Accepts the display symbols (`+`, `-`, `×`, `÷`) plus the ASCII
    /// spellings `*`, `x`, and `/`, so hosts can wire plain keyboards
    /// without a mapping table of their own.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::Operation;
    ///
    /// assert_eq!(Operation::from_symbol('*'), Some(Operation::Multiply));
    /// assert_eq!(Operation::from_symbol('÷'), Some(Operation::Divide));
    /// assert_eq!(Operation::from_symbol('%'), None);
    /// ```
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | 'x' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_returns_correct_value() {
        assert_eq!(Operation::Add.name(), "Add");
        assert_eq!(Operation::Subtract.name(), "Subtract");
        assert_eq!(Operation::Multiply.name(), "Multiply");
        assert_eq!(Operation::Divide.name(), "Divide");
    }

    #[test]
    fn symbol_matches_keypad_legend() {
        assert_eq!(Operation::Add.symbol(), '+');
        assert_eq!(Operation::Subtract.symbol(), '-');
        assert_eq!(Operation::Multiply.symbol(), '×');
        assert_eq!(Operation::Divide.symbol(), '÷');
    }

    #[test]
    fn apply_performs_basic_arithmetic() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operation::Subtract.apply(2.0, 5.0), -3.0);
        assert_eq!(Operation::Multiply.apply(4.0, 2.5), 10.0);
        assert_eq!(Operation::Divide.apply(6.0, 3.0), 2.0);
    }

    #[test]
    fn apply_uses_float_division_semantics() {
        assert!(Operation::Divide.apply(5.0, 0.0).is_infinite());
        assert!(Operation::Divide.apply(-5.0, 0.0).is_infinite());
        assert!(Operation::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn from_symbol_accepts_ascii_spellings() {
        assert_eq!(Operation::from_symbol('+'), Some(Operation::Add));
        assert_eq!(Operation::from_symbol('-'), Some(Operation::Subtract));
        assert_eq!(Operation::from_symbol('*'), Some(Operation::Multiply));
        assert_eq!(Operation::from_symbol('x'), Some(Operation::Multiply));
        assert_eq!(Operation::from_symbol('×'), Some(Operation::Multiply));
        assert_eq!(Operation::from_symbol('/'), Some(Operation::Divide));
        assert_eq!(Operation::from_symbol('÷'), Some(Operation::Divide));
    }

    #[test]
    fn from_symbol_rejects_unknown_characters() {
        assert_eq!(Operation::from_symbol('%'), None);
        assert_eq!(Operation::from_symbol('='), None);
        assert_eq!(Operation::from_symbol('7'), None);
    }

    #[test]
    fn from_symbol_round_trips_display_symbols() {
        for op in [
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
        ] {
            assert_eq!(Operation::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn operation_serializes_correctly() {
        let op = Operation::Multiply;
        let json = serde_json::to_string(&op).unwrap();
        let deserialized: Operation = serde_json::from_str(&json).unwrap();
        assert_eq!(op, deserialized);
    }
}
