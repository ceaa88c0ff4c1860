//! Roman numeral decoding: symbol values, the lax symbol-set validator,
//! and the subtractive right-to-left scan.

/// Decimal value of a single Roman symbol. Characters outside
/// {I,V,X,L,C,D,M} map to 0; only uppercase symbols are recognized.
pub fn symbol_value(symbol: char) -> i64 {
    match symbol {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => 0,
    }
}

/// True iff every character of `numeral` is a Roman symbol.
///
/// The empty string is vacuously valid. Ordering, repetition limits, and
/// subtractive-pair legality are deliberately not checked: "IIII" and "VV"
/// pass and decode deterministically.
pub fn is_valid_roman(numeral: &str) -> bool {
    numeral.chars().all(|c| symbol_value(c) != 0)
}

/// Decode a numeral with a subtractive right-to-left scan.
///
/// Each symbol's value is subtracted from the running total when it is
/// smaller than the value of the symbol to its right, otherwise added.
/// This is standard subtractive decoding for well-formed numerals and a
/// deterministic reading for malformed ones. The function never rejects
/// input; characters outside the symbol set contribute 0, so callers gate
/// with [`is_valid_roman`] first.
pub fn roman_to_decimal(numeral: &str) -> i64 {
    let mut total = 0;
    let mut prev = 0;
    for symbol in numeral.chars().rev() {
        let curr = symbol_value(symbol);
        if curr < prev {
            total -= curr;
        } else {
            total += curr;
        }
        prev = curr;
    }
    total
}
