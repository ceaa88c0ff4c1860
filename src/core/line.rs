//! Per-line evaluation: tokenize one input line, validate and convert the
//! Roman operands, apply the operator, and render the result as words.
use crate::core::roman::{is_valid_roman, roman_to_decimal};
use crate::core::words::number_to_words;
use crate::types::{LineError, Operator, OutputRecord};

/// Evaluate one non-blank input line of the form `<numeral> <op> <numeral>`.
///
/// The line must split into exactly three whitespace-delimited tokens and
/// the middle token must be exactly one character; anything else is
/// [`LineError::Malformed`]. Operand validation runs before operator
/// recognition, so `ABC $ V` reports the bad numeral, not the bad operator.
pub fn process_line(line: &str) -> OutputRecord {
    let mut tokens = line.split_whitespace();
    let (Some(lhs), Some(operator), Some(rhs), None) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(LineError::Malformed);
    };

    // Strict operator token: exactly one character.
    let mut symbols = operator.chars();
    let (Some(symbol), None) = (symbols.next(), symbols.next()) else {
        return Err(LineError::Malformed);
    };

    if !is_valid_roman(lhs) || !is_valid_roman(rhs) {
        return Err(LineError::InvalidNumeral);
    }

    let lhs = roman_to_decimal(lhs);
    let rhs = roman_to_decimal(rhs);

    let operator = Operator::from_symbol(symbol).ok_or(LineError::UnsupportedOperator)?;
    let result = operator.apply(lhs, rhs)?;

    Ok(number_to_words(result))
}
