//! Session-local journal of completed computations.
//!
//! Like a printing calculator's paper tape: every collapsed computation is
//! appended as an immutable record. The tape lives in memory for the host
//! session and is never written anywhere.

use super::operation::Operation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One collapsed computation: both operands, the operation between them,
/// and the result it produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Computation {
    /// The operand captured when the operation was chosen
    pub lhs: f64,
    /// The operand entered afterwards
    pub rhs: f64,
    /// The operation applied
    pub operation: Operation,
    /// The value stored back as the new current operand
    pub result: f64,
}

impl fmt::Display for Computation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.lhs,
            self.operation.symbol(),
            self.rhs,
            self.result
        )
    }
}

/// A computation stamped with the moment it was collapsed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TapeEntry {
    /// What was computed
    pub computation: Computation,
    /// When the computation collapsed
    pub timestamp: DateTime<Utc>,
}

/// Ordered, append-only record of completed computations.
///
/// The tape is immutable - `record` returns a new tape with the entry
/// added, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use tally::core::{Computation, Operation, Tape, TapeEntry};
/// use chrono::Utc;
///
/// let tape = Tape::new();
/// let entry = TapeEntry {
///     computation: Computation {
///         lhs: 2.0,
///         rhs: 3.0,
///         operation: Operation::Add,
///         result: 5.0,
///     },
///     timestamp: Utc::now(),
/// };
///
/// let tape = tape.record(entry);
/// assert_eq!(tape.len(), 1);
/// assert_eq!(tape.last().unwrap().computation.result, 5.0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tape {
    entries: Vec<TapeEntry>,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Create a new empty tape.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a computation, returning a new tape.
    ///
    /// This is a pure function - it does not mutate the existing tape
    /// but returns a new one with the entry appended.
    pub fn record(&self, entry: TapeEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// Get all recorded entries in order.
    pub fn entries(&self) -> &[TapeEntry] {
        &self.entries
    }

    /// Get the most recent entry, if any.
    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.last()
    }

    /// Number of recorded computations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether nothing has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(lhs: f64, rhs: f64, operation: Operation) -> TapeEntry {
        TapeEntry {
            computation: Computation {
                lhs,
                rhs,
                operation,
                result: operation.apply(lhs, rhs),
            },
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_tape_is_empty() {
        let tape = Tape::new();
        assert!(tape.is_empty());
        assert_eq!(tape.len(), 0);
        assert!(tape.last().is_none());
    }

    #[test]
    fn record_appends_entry() {
        let tape = Tape::new().record(entry(2.0, 3.0, Operation::Add));

        assert_eq!(tape.len(), 1);
        assert_eq!(tape.last().unwrap().computation.result, 5.0);
    }

    #[test]
    fn record_is_immutable() {
        let tape = Tape::new();
        let recorded = tape.record(entry(6.0, 3.0, Operation::Divide));

        assert_eq!(tape.len(), 0);
        assert_eq!(recorded.len(), 1);
    }

    #[test]
    fn entries_preserve_order() {
        let tape = Tape::new()
            .record(entry(1.0, 1.0, Operation::Add))
            .record(entry(2.0, 2.0, Operation::Multiply));

        let results: Vec<f64> = tape
            .entries()
            .iter()
            .map(|e| e.computation.result)
            .collect();
        assert_eq!(results, vec![2.0, 4.0]);
    }

    #[test]
    fn computation_displays_as_equation() {
        let computation = Computation {
            lhs: 2.0,
            rhs: 3.0,
            operation: Operation::Multiply,
            result: 6.0,
        };
        assert_eq!(computation.to_string(), "2 × 3 = 6");
    }

    #[test]
    fn tape_serializes_correctly() {
        let tape = Tape::new().record(entry(5.0, 0.5, Operation::Subtract));

        let json = serde_json::to_string(&tape).unwrap();
        let deserialized: Tape = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), tape.len());
        assert_eq!(
            deserialized.last().unwrap().computation,
            tape.last().unwrap().computation
        );
    }
}
