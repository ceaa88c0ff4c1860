//! Shared types used across ROMCALC.
//! Includes the arithmetic `Operator`, the per-line `LineError` taxonomy
//! whose `Display` strings are the exact phrases written to the output
//! stream, and the `OutputRecord` produced for every non-blank input line.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Arithmetic operator accepted between two Roman numeral operands.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Recognize a single operator character; anything else is unsupported.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Apply the operator to two signed operands.
    ///
    /// Division is integer division truncating toward zero and rejects a
    /// zero divisor. All operations are checked; an out-of-range result
    /// (including `i64::MIN / -1`) yields [`LineError::Overflow`].
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, LineError> {
        let value = match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Sub => lhs.checked_sub(rhs),
            Operator::Mul => lhs.checked_mul(rhs),
            Operator::Div => {
                if rhs == 0 {
                    return Err(LineError::DivisionByZero);
                }
                lhs.checked_div(rhs)
            }
        };
        value.ok_or(LineError::Overflow)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Per-line failure written to the output stream in place of a result.
///
/// Every variant is recoverable: the batch driver serializes the phrase and
/// continues with the next line.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Error, Serialize, Deserialize)]
pub enum LineError {
    /// The line does not split into exactly three whitespace-delimited
    /// tokens with a single-character operator in the middle.
    #[error("Invalid input")]
    Malformed,

    /// An operand contains a character outside {I,V,X,L,C,D,M}.
    #[error("Invalid Roman numeral")]
    InvalidNumeral,

    /// The divisor operand evaluates to zero under `/`.
    #[error("Division by zero error")]
    DivisionByZero,

    /// The operator character is not one of `+ - * /`.
    #[error("Invalid operation")]
    UnsupportedOperator,

    /// A checked arithmetic operation left the `i64` range.
    #[error("Arithmetic overflow")]
    Overflow,
}

/// Outcome of processing one non-blank input line: the English-word
/// rendering of the result, or the error phrase to write in its place.
pub type OutputRecord = std::result::Result<String, LineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_roundtrips_through_symbol() {
        for op in [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div] {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol('$'), None);
        assert_eq!(Operator::from_symbol('%'), None);
    }

    #[test]
    fn test_apply_basic_arithmetic() {
        assert_eq!(Operator::Add.apply(4, 5), Ok(9));
        assert_eq!(Operator::Sub.apply(1, 10), Ok(-9));
        assert_eq!(Operator::Mul.apply(12, 12), Ok(144));
        assert_eq!(Operator::Div.apply(10, 1), Ok(10));
    }

    #[test]
    fn test_apply_division_truncates_toward_zero() {
        assert_eq!(Operator::Div.apply(10, 3), Ok(3));
        assert_eq!(Operator::Div.apply(-7, 2), Ok(-3));
        assert_eq!(Operator::Div.apply(7, -2), Ok(-3));
    }

    #[test]
    fn test_apply_rejects_zero_divisor() {
        assert_eq!(Operator::Div.apply(10, 0), Err(LineError::DivisionByZero));
    }

    #[test]
    fn test_apply_reports_overflow() {
        assert_eq!(Operator::Add.apply(i64::MAX, 1), Err(LineError::Overflow));
        assert_eq!(Operator::Mul.apply(i64::MAX, 2), Err(LineError::Overflow));
        assert_eq!(Operator::Div.apply(i64::MIN, -1), Err(LineError::Overflow));
    }

    #[test]
    fn test_line_error_phrases_match_output_contract() {
        assert_eq!(LineError::Malformed.to_string(), "Invalid input");
        assert_eq!(LineError::InvalidNumeral.to_string(), "Invalid Roman numeral");
        assert_eq!(LineError::DivisionByZero.to_string(), "Division by zero error");
        assert_eq!(LineError::UnsupportedOperator.to_string(), "Invalid operation");
        assert_eq!(LineError::Overflow.to_string(), "Arithmetic overflow");
    }
}
