//! Unified Calculator Driver
//!
//! **Write the test logic once, run it everywhere.** Every front-end that
//! can press keypad buttons and show the two display lines implements
//! [`CalculatorDriver`], and the `verify_*` scenarios below run unchanged
//! against each of them.

use crate::binding::KeypadAction;
use crate::core::{CalcResult, Operator};

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use tally_calculator::prelude::*;
///
/// let mut driver = DomDriver::new();
/// driver.press_sequence("1234 + 1 =").unwrap();
/// assert_eq!(driver.main_text(), "1,235");
/// ```
pub trait CalculatorDriver {
    /// Presses one keypad button
    fn press(&mut self, action: KeypadAction);

    /// Text of the current-value display
    fn main_text(&self) -> String;

    /// Text of the pending-expression display
    fn secondary_text(&self) -> String;

    /// Presses all-clear
    fn clear(&mut self) {
        self.press(KeypadAction::AllClear);
    }

    /// Presses each character of a key script; whitespace is skipped.
    ///
    /// Stops at the first character with no keypad binding, leaving the
    /// keys before it applied.
    fn press_sequence(&mut self, keys: &str) -> CalcResult<()> {
        for c in keys.chars().filter(|c| !c.is_whitespace()) {
            self.press(KeypadAction::from_script_char(c)?);
        }
        Ok(())
    }
}

// ===== Unified Test Scenarios =====
// These work with ANY CalculatorDriver implementation

fn keys<D: CalculatorDriver>(driver: &mut D, keys: &str) {
    driver
        .press_sequence(keys)
        .unwrap_or_else(|e| panic!("key script {keys:?}: {e}"));
}

fn run<D: CalculatorDriver>(driver: &mut D, script: &str) {
    driver.clear();
    keys(driver, script);
}

/// Verifies one evaluation per operator
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    run(driver, "2 + 3 =");
    assert_eq!(driver.main_text(), "5");

    run(driver, "10 - 4 =");
    assert_eq!(driver.main_text(), "6");

    run(driver, "6 * 7 =");
    assert_eq!(driver.main_text(), "42");

    run(driver, "20 / 8 =");
    assert_eq!(driver.main_text(), "2.5");
}

/// Verifies evaluate-then-continue chaining
pub fn verify_chained_operations<D: CalculatorDriver>(driver: &mut D) {
    run(driver, "3 + 4 +");
    assert_eq!(driver.main_text(), "");
    assert_eq!(driver.secondary_text(), "7 +");

    keys(driver, "5 =");
    assert_eq!(driver.main_text(), "12");
    assert_eq!(driver.secondary_text(), "");

    // a result can start the next chain
    driver.press(KeypadAction::Operator(Operator::Multiply));
    keys(driver, "2 =");
    assert_eq!(driver.main_text(), "24");
}

/// Verifies decimal entry and the single-point rule
pub fn verify_decimal_entry<D: CalculatorDriver>(driver: &mut D) {
    run(driver, "1..5.");
    assert_eq!(driver.main_text(), "1.5");

    run(driver, ".5 + .25 =");
    assert_eq!(driver.main_text(), "0.75");
}

/// Verifies delete and all-clear
pub fn verify_delete_and_clear<D: CalculatorDriver>(driver: &mut D) {
    run(driver, "123<");
    assert_eq!(driver.main_text(), "12");

    run(driver, "<<");
    assert_eq!(driver.main_text(), "");

    run(driver, "9 - 1");
    driver.clear();
    assert_eq!(driver.main_text(), "");
    assert_eq!(driver.secondary_text(), "");
}

/// Verifies thousands grouping on both display lines
pub fn verify_formatting<D: CalculatorDriver>(driver: &mut D) {
    run(driver, "1234.5");
    assert_eq!(driver.main_text(), "1,234.5");

    run(driver, "1234567 ÷");
    assert_eq!(driver.secondary_text(), "1,234,567 ÷");
}

/// Verifies that a non-finite result blanks the main display
pub fn verify_divide_by_zero<D: CalculatorDriver>(driver: &mut D) {
    run(driver, "1 / 0 =");
    assert_eq!(driver.main_text(), "");
    assert_eq!(driver.secondary_text(), "");
}

/// Complete verification suite - runs every scenario
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chained_operations(driver);
    verify_decimal_entry(driver);
    verify_delete_and_clear(driver);
    verify_formatting(driver);
    verify_divide_by_zero(driver);
    driver.clear();
}
