//! Binary operations offered by the keypad
//!
//! Every chain is evaluated two operands at a time, left to right, so an
//! operation carries no precedence or associativity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Type-safe operation enum - the four keypad operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (-)
    #[serde(rename = "-")]
    Subtract,
    /// Multiplication (*)
    #[serde(rename = "*")]
    Multiply,
    /// Division (÷)
    #[serde(rename = "÷")]
    Divide,
}

impl Operation {
    /// All operations in keypad order
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Add, Self::Subtract];

    /// Returns the operator symbol shown on the keypad and in the display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "÷",
        }
    }

    /// Parses a keypad label. Only the exact symbols are accepted;
    /// see [`FromStr`] for the ASCII-friendly variant.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "÷" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operation with IEEE-754 semantics.
    ///
    /// Division by zero yields `±inf` or NaN instead of an error.
    #[must_use]
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    /// Accepts the keypad symbols plus `/`, `x` and `×` typed from a terminal
    fn from_str(s: &str) -> CalcResult<Self> {
        let trimmed = s.trim();
        Self::from_symbol(trimmed)
            .or_else(|| match trimmed {
                "/" => Some(Self::Divide),
                "x" | "X" | "×" => Some(Self::Multiply),
                "−" => Some(Self::Subtract),
                _ => None,
            })
            .ok_or_else(|| CalcError::UnknownOperation(s.to_string()))
    }
}
