//! Chained Operations
//!
//! Operations collapse eagerly and chain left-to-right with no precedence:
//! 2 + 3 × 4 evaluates as (2 + 3) × 4 = 20.
//!
//! Run with: cargo run --example chained_operations

use tally::core::Operation;
use tally::machine::{Calculator, Input};

fn main() {
    println!("=== Chained Operations ===\n");

    let mut calculator = Calculator::new();
    let presses = [
        Input::Digit('2'),
        Input::ChooseOperation(Operation::Add),
        Input::Digit('3'),
        Input::ChooseOperation(Operation::Multiply),
        Input::Digit('4'),
        Input::Compute,
    ];

    for input in presses {
        calculator.press(input);
    }

    println!("2 + 3 × 4 entered on the keypad");
    println!("Display shows: {}", calculator.readout().current);

    println!("\nEvery collapse on the tape:");
    for entry in calculator.tape().entries() {
        println!("  {}", entry.computation);
    }

    println!("\n=== Example Complete ===");
}
