//! Core calculator state machine
//!
//! The calculator never reports a failure: every keystroke leaves it in a
//! displayable state, and input that cannot be computed is ignored.
//! [`CalcError`] only exists at the seams where labels and configuration
//! are turned into typed values.

pub mod format;
pub mod number;
mod operations;

pub use operations::Operation;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use self::number::{number_to_string, parse_float};

/// Result type for calculator seams (labels, controls, configuration)
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised while translating input into calculator calls
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Label does not name one of the four operations
    #[error("Unknown operation: {0:?}")]
    UnknownOperation(String),
    /// Control cannot drive the calculator (missing element, bad label)
    #[error("Unknown control: {0:?}")]
    UnknownControl(String),
    /// No keypad key matches the label
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),
    /// Display configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Keypad calculator state
///
/// Holds the operand being typed, the operand captured when an operation
/// was chosen, and the pending operation. Chains evaluate strictly left to
/// right, two operands at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculator {
    current_operand: String,
    previous_operand: String,
    operation: Option<Operation>,
    /// `current_operand` holds an unedited result of `compute`
    #[serde(default)]
    current_is_result: bool,
}

impl Calculator {
    /// Creates a cleared calculator
    #[must_use]
    pub fn new() -> Self {
        let mut calc = Self {
            current_operand: String::new(),
            previous_operand: String::new(),
            operation: None,
            current_is_result: false,
        };
        calc.clear();
        calc
    }

    /// Operand being typed; empty means nothing entered yet
    #[must_use]
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// Left-hand operand of the pending operation
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    /// Pending operation, if any
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// Resets both operands and drops the pending operation
    pub fn clear(&mut self) {
        trace!("clear");
        self.current_operand.clear();
        self.previous_operand.clear();
        self.operation = None;
        self.current_is_result = false;
    }

    /// Removes the last character typed. No-op on empty input.
    pub fn delete_last_char(&mut self) {
        self.current_is_result = false;
        if self.current_operand.pop().is_none() {
            debug!("delete ignored: nothing typed");
        }
    }

    /// Appends a digit or decimal point token verbatim.
    ///
    /// A token that would give the operand a second decimal point is
    /// dropped, as is any decimal point typed straight after a result.
    /// Digits typed after a result extend it.
    pub fn append_symbol(&mut self, token: &str) {
        let token_points = token.matches('.').count();
        if token_points > 0 && self.current_is_result {
            debug!(token, operand = %self.current_operand, "append ignored: decimal point after result");
            return;
        }
        if token_points > 0 && (token_points > 1 || self.current_operand.contains('.')) {
            debug!(token, operand = %self.current_operand, "append ignored: second decimal point");
            return;
        }
        self.current_operand.push_str(token);
        self.current_is_result = false;
        trace!(token, operand = %self.current_operand, "appended");
    }

    /// Starts `operation` on the typed operand.
    ///
    /// Ignored while nothing is typed. A pending operation is computed
    /// first, so `3 + 4 *` continues as `7 *`.
    pub fn choose_operation(&mut self, operation: Operation) {
        if self.current_operand.is_empty() {
            debug!(%operation, "operation ignored: nothing typed");
            return;
        }
        if !self.previous_operand.is_empty() {
            self.compute();
        }
        self.operation = Some(operation);
        self.previous_operand = std::mem::take(&mut self.current_operand);
        self.current_is_result = false;
        trace!(%operation, previous = %self.previous_operand, "operation chosen");
    }

    /// Applies the pending operation to both operands.
    ///
    /// Leaves the state untouched when either operand is not a number or
    /// no operation is pending. Division by zero produces `Infinity` or
    /// `NaN` as the new operand.
    pub fn compute(&mut self) {
        let prev = parse_float(&self.previous_operand);
        let current = parse_float(&self.current_operand);
        if prev.is_nan() || current.is_nan() {
            debug!(
                previous = %self.previous_operand,
                current = %self.current_operand,
                "compute ignored: operand is not a number"
            );
            return;
        }
        let Some(operation) = self.operation else {
            debug!("compute ignored: no pending operation");
            return;
        };

        let result = operation.apply(prev, current);
        self.current_operand = number_to_string(result);
        self.current_is_result = true;
        self.operation = None;
        self.previous_operand.clear();
        trace!(%operation, prev, current, result, "computed");
    }

    /// Formats an operand for display with the default grouping.
    ///
    /// Pure; see [`format::format_with`] for a configurable separator.
    #[must_use]
    pub fn format_for_display(value: &str) -> String {
        format::format_for_display(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(tokens: &[&str]) -> Calculator {
        let mut calc = Calculator::new();
        for token in tokens {
            calc.append_symbol(token);
        }
        calc
    }

    // ===== CalcError =====

    #[test]
    fn test_error_display() {
        assert_eq!(
            CalcError::UnknownOperation("%".into()).to_string(),
            "Unknown operation: \"%\""
        );
        assert_eq!(
            CalcError::Config("bad".into()).to_string(),
            "Configuration error: bad"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::UnknownKey("?".into()));
        assert!(err.to_string().contains("Unknown key"));
    }

    // ===== clear =====

    #[test]
    fn test_new_is_cleared() {
        let calc = Calculator::new();
        assert_eq!(calc.current_operand(), "");
        assert_eq!(calc.previous_operand(), "");
        assert_eq!(calc.operation(), None);
        assert_eq!(calc, Calculator::default());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut calc = typed(&["1", "2"]);
        calc.choose_operation(Operation::Add);
        calc.append_symbol("3");
        calc.clear();
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut once = typed(&["9"]);
        once.choose_operation(Operation::Divide);
        let mut twice = once.clone();
        once.clear();
        twice.clear();
        twice.clear();
        assert_eq!(once, twice);
    }

    // ===== delete_last_char =====

    #[test]
    fn test_delete_removes_last_char() {
        let mut calc = typed(&["1", "2", "."]);
        calc.delete_last_char();
        assert_eq!(calc.current_operand(), "12");
    }

    #[test]
    fn test_delete_on_empty_is_noop() {
        let mut calc = typed(&["5"]);
        calc.choose_operation(Operation::Add);
        let before = calc.clone();
        calc.delete_last_char();
        assert_eq!(calc, before);
    }

    #[test]
    fn test_delete_is_character_level_on_results() {
        let mut calc = typed(&["5"]);
        calc.choose_operation(Operation::Divide);
        calc.append_symbol("0");
        calc.compute();
        calc.delete_last_char();
        assert_eq!(calc.current_operand(), "Infinit");
    }

    // ===== append_symbol =====

    #[test]
    fn test_append_builds_operand() {
        let calc = typed(&["0", "0", "7", ".", "5"]);
        assert_eq!(calc.current_operand(), "007.5");
    }

    #[test]
    fn test_append_rejects_second_decimal_point() {
        let calc = typed(&["1", ".", "2", ".", "3", "."]);
        assert_eq!(calc.current_operand(), "1.23");
    }

    #[test]
    fn test_append_accepts_multi_digit_paste() {
        let calc = typed(&["12", "34"]);
        assert_eq!(calc.current_operand(), "1234");
    }

    #[test]
    fn test_append_rejects_paste_with_extra_point() {
        let calc = typed(&["1.5", "2.5"]);
        assert_eq!(calc.current_operand(), "1.5");
        let calc = typed(&["1.2.3"]);
        assert_eq!(calc.current_operand(), "");
    }

    #[test]
    fn test_append_after_result_extends_result() {
        let mut calc = typed(&["2"]);
        calc.choose_operation(Operation::Multiply);
        calc.append_symbol("7");
        calc.compute();
        calc.append_symbol("1");
        assert_eq!(calc.current_operand(), "141");
    }

    #[test]
    fn test_decimal_point_after_result_is_ignored() {
        let mut calc = typed(&["2"]);
        calc.choose_operation(Operation::Multiply);
        calc.append_symbol("7");
        calc.compute();
        calc.append_symbol(".");
        calc.append_symbol("5.");
        assert_eq!(calc.current_operand(), "14");

        calc.append_symbol("1");
        calc.append_symbol(".");
        calc.append_symbol("5");
        assert_eq!(calc.current_operand(), "141.5");
    }

    #[test]
    fn test_decimal_point_after_edited_result() {
        let mut calc = typed(&["9"]);
        calc.choose_operation(Operation::Add);
        calc.append_symbol("1");
        calc.compute();
        calc.delete_last_char();
        calc.append_symbol(".");
        assert_eq!(calc.current_operand(), "1.");
    }

    #[test]
    fn test_large_result_displays_shortest_digits() {
        let mut calc = typed(&["10000000000000000000000"]);
        calc.choose_operation(Operation::Multiply);
        calc.append_symbol("10");
        calc.compute();
        assert_eq!(calc.current_operand(), "1e+23");
        assert_eq!(
            Calculator::format_for_display(calc.current_operand()),
            "100,000,000,000,000,000,000,000"
        );
    }

    // ===== choose_operation =====

    #[test]
    fn test_choose_operation_moves_operand() {
        let mut calc = typed(&["4", "2"]);
        calc.choose_operation(Operation::Subtract);
        assert_eq!(calc.previous_operand(), "42");
        assert_eq!(calc.current_operand(), "");
        assert_eq!(calc.operation(), Some(Operation::Subtract));
    }

    #[test]
    fn test_choose_operation_without_input_is_noop() {
        let mut calc = Calculator::new();
        calc.choose_operation(Operation::Add);
        assert_eq!(calc, Calculator::new());

        let mut pending = typed(&["3"]);
        pending.choose_operation(Operation::Add);
        let before = pending.clone();
        pending.choose_operation(Operation::Multiply);
        assert_eq!(pending, before);
    }

    #[test]
    fn test_chain_computes_left_to_right() {
        let mut calc = typed(&["3"]);
        calc.choose_operation(Operation::Add);
        calc.append_symbol("4");
        calc.choose_operation(Operation::Multiply);
        assert_eq!(calc.previous_operand(), "7");
        assert_eq!(calc.operation(), Some(Operation::Multiply));
        calc.append_symbol("2");
        calc.compute();
        assert_eq!(calc.current_operand(), "14");
        assert_eq!(calc.previous_operand(), "");
        assert_eq!(calc.operation(), None);
    }

    #[test]
    fn test_chain_with_unparseable_operand_replaces_previous() {
        let mut calc = typed(&["3"]);
        calc.choose_operation(Operation::Add);
        calc.append_symbol(".");
        calc.choose_operation(Operation::Subtract);
        assert_eq!(calc.previous_operand(), ".");
        assert_eq!(calc.operation(), Some(Operation::Subtract));
    }

    // ===== compute =====

    #[test]
    fn test_compute_each_operation() {
        for (op, expected) in [
            (Operation::Add, "8"),
            (Operation::Subtract, "4"),
            (Operation::Multiply, "12"),
            (Operation::Divide, "3"),
        ] {
            let mut calc = typed(&["6"]);
            calc.choose_operation(op);
            calc.append_symbol("2");
            calc.compute();
            assert_eq!(calc.current_operand(), expected, "{op}");
        }
    }

    #[test]
    fn test_divide_by_zero_gives_infinity() {
        let mut calc = typed(&["5"]);
        calc.choose_operation(Operation::Divide);
        calc.append_symbol("0");
        calc.compute();
        assert_eq!(calc.current_operand(), "Infinity");
        assert_eq!(calc.operation(), None);
    }

    #[test]
    fn test_zero_divided_by_zero_gives_nan() {
        let mut calc = typed(&["0"]);
        calc.choose_operation(Operation::Divide);
        calc.append_symbol("0");
        calc.compute();
        assert_eq!(calc.current_operand(), "NaN");
    }

    #[test]
    fn test_compute_without_operation_is_noop() {
        let mut calc = typed(&["1", "2"]);
        let before = calc.clone();
        calc.compute();
        assert_eq!(calc, before);
    }

    #[test]
    fn test_compute_with_empty_current_is_noop() {
        let mut calc = typed(&["8"]);
        calc.choose_operation(Operation::Add);
        let before = calc.clone();
        calc.compute();
        assert_eq!(calc, before);
    }

    #[test]
    fn test_compute_on_nan_result_is_noop() {
        let mut calc = typed(&["0"]);
        calc.choose_operation(Operation::Divide);
        calc.append_symbol("0");
        calc.compute();
        calc.choose_operation(Operation::Add);
        calc.append_symbol("1");
        let before = calc.clone();
        calc.compute();
        assert_eq!(calc, before);
    }

    #[test]
    fn test_compute_chains_from_infinity() {
        let mut calc = typed(&["1"]);
        calc.choose_operation(Operation::Divide);
        calc.append_symbol("0");
        calc.compute();
        calc.choose_operation(Operation::Subtract);
        calc.append_symbol("1");
        calc.compute();
        assert_eq!(calc.current_operand(), "Infinity");
    }

    #[test]
    fn test_compute_floating_point_result() {
        let mut calc = typed(&[".", "1"]);
        calc.choose_operation(Operation::Add);
        calc.append_symbol(".2");
        calc.compute();
        assert_eq!(calc.current_operand(), "0.30000000000000004");
    }

    // ===== format_for_display =====

    #[test]
    fn test_format_for_display_delegates() {
        assert_eq!(Calculator::format_for_display("1234.5"), "1,234.5");
        assert_eq!(Calculator::format_for_display("."), ".");
    }

    // ===== serde =====

    #[test]
    fn test_state_serializes_with_symbol() {
        let mut calc = typed(&["3"]);
        calc.choose_operation(Operation::Divide);
        let json = serde_json::to_value(&calc).unwrap();
        assert_eq!(json["previous_operand"], "3");
        assert_eq!(json["operation"], "÷");
        assert_eq!(json["current_operand"], "");
    }
}
