//! Keypad Session
//!
//! Drives the calculator the way a host UI would: one key per event,
//! refreshing both display regions after every press.
//!
//! Run with: cargo run --example keypad_session

use tally::machine::{Calculator, KeyError};

fn main() -> Result<(), KeyError> {
    println!("=== Keypad Session ===\n");

    let mut calculator = Calculator::new();

    for key in "1234567.89+1=".chars() {
        calculator.press_key(key)?;
        let readout = calculator.readout();
        println!("[{key}]  {:>12}  {:>16}", readout.previous, readout.current);
    }

    println!("\nTape:");
    for entry in calculator.tape().entries() {
        println!("  {}", entry.computation);
    }

    println!("\n=== Session Complete ===");
    Ok(())
}
