//! Mock DOM Demo
//!
//! Clicks keypad buttons in a mock document and prints both display
//! elements after every click.
//!
//! Run with: cargo run --example dom_demo

use keypad_calculator::prelude::*;
use keypad_calculator::wasm::{CURRENT_OPERAND_ATTR, PREVIOUS_OPERAND_ATTR};

fn main() -> CalcResult<()> {
    println!("╔══════════════════════════════════════════╗");
    println!("║     Keypad Calculator - Mock DOM Demo    ║");
    println!("╚══════════════════════════════════════════╝");
    println!();

    let mut driver = DomDriver::new();

    println!("Keypad:");
    let keypad = Keypad::new();
    let (rows, _) = keypad.dimensions();
    for row in 0..rows {
        let labels: Vec<String> = keypad.row(row).map(KeypadButtonDef::label).collect();
        println!("   {}", labels.join("  "));
    }
    println!();

    println!("Clicking: 1 2 3 4 . 5 + 6 × 2 =");
    let clicks = [
        "btn-1", "btn-2", "btn-3", "btn-4", "btn-decimal", "btn-5", "btn-plus", "btn-6",
        "btn-times", "btn-2", "btn-equals",
    ];
    for id in clicks {
        let action = driver.click(id)?;
        let dom = driver.dom();
        println!(
            "   {:<12} {:>6} | previous: {:<14} current: {}",
            id,
            action.label(),
            format!("{:?}", dom.attr_text(PREVIOUS_OPERAND_ATTR).unwrap_or_default()),
            format!("{:?}", dom.attr_text(CURRENT_OPERAND_ATTR).unwrap_or_default()),
        );
    }
    println!();

    println!("Raw state: {:?}", driver.calculator());
    println!("Events dispatched: {}", driver.dom().event_history().len());
    Ok(())
}
