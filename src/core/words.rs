//! English-word rendering of signed integers, grouped base-1000 with
//! irregular teens and scale words.

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];
const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];
// One scale word per base-1000 group; seven groups cover the full u64
// magnitude range, so every i64 renders.
const SCALES: [&str; 7] = [
    "",
    "Thousand",
    "Million",
    "Billion",
    "Trillion",
    "Quadrillion",
    "Quintillion",
];

/// Render a signed integer as capitalized English words.
///
/// Zero is "Zero"; negative values carry a "Negative" prefix. The magnitude
/// is split into base-1000 groups rendered most-significant first, with
/// zero-valued groups skipped entirely (no "Zero Thousand"). Words are
/// joined by single spaces with no leading or trailing whitespace. Pure
/// function: a fresh `String` per call, no shared state.
pub fn number_to_words(number: i64) -> String {
    if number == 0 {
        return "Zero".to_string();
    }

    let mut words: Vec<&'static str> = Vec::new();
    if number < 0 {
        words.push("Negative");
    }

    // Base-1000 groups, least-significant first. The magnitude lives in u64
    // so i64::MIN needs no special case.
    let mut groups: Vec<u64> = Vec::new();
    let mut magnitude = number.unsigned_abs();
    while magnitude > 0 {
        groups.push(magnitude % 1000);
        magnitude /= 1000;
    }

    for (scale, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        push_group_words(group, &mut words);
        if scale > 0 {
            words.push(SCALES[scale]);
        }
    }

    words.join(" ")
}

/// Append the words for one nonzero group of value 1-999.
fn push_group_words(group: u64, words: &mut Vec<&'static str>) {
    let hundreds = (group / 100) as usize;
    let remainder = (group % 100) as usize;

    if hundreds > 0 {
        words.push(ONES[hundreds]);
        words.push("Hundred");
    }

    if (10..20).contains(&remainder) {
        // Irregular teens replace the tens/ones split.
        words.push(TEENS[remainder - 10]);
    } else {
        let tens = remainder / 10;
        let ones = remainder % 10;
        if tens > 0 {
            words.push(TENS[tens]);
        }
        if ones > 0 {
            words.push(ONES[ones]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(number_to_words(0), "Zero");
    }

    #[test]
    fn test_single_digits() {
        assert_eq!(number_to_words(1), "One");
        assert_eq!(number_to_words(7), "Seven");
        assert_eq!(number_to_words(9), "Nine");
    }

    #[test]
    fn test_teens_are_irregular() {
        assert_eq!(number_to_words(10), "Ten");
        assert_eq!(number_to_words(11), "Eleven");
        assert_eq!(number_to_words(15), "Fifteen");
        assert_eq!(number_to_words(19), "Nineteen");
    }

    #[test]
    fn test_tens_and_ones() {
        assert_eq!(number_to_words(20), "Twenty");
        assert_eq!(number_to_words(42), "Forty Two");
        assert_eq!(number_to_words(90), "Ninety");
        assert_eq!(number_to_words(99), "Ninety Nine");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(number_to_words(100), "One Hundred");
        assert_eq!(number_to_words(101), "One Hundred One");
        assert_eq!(number_to_words(115), "One Hundred Fifteen");
        assert_eq!(number_to_words(342), "Three Hundred Forty Two");
        assert_eq!(number_to_words(900), "Nine Hundred");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(number_to_words(1000), "One Thousand");
        assert_eq!(number_to_words(1001), "One Thousand One");
        assert_eq!(number_to_words(12_000), "Twelve Thousand");
        assert_eq!(number_to_words(90_000), "Ninety Thousand");
        assert_eq!(
            number_to_words(1994),
            "One Thousand Nine Hundred Ninety Four"
        );
    }

    #[test]
    fn test_zero_groups_are_skipped() {
        // 1,000,001 has an empty thousands group; it must contribute no words.
        assert_eq!(number_to_words(1_000_001), "One Million One");
        assert_eq!(number_to_words(2_000_000), "Two Million");
    }

    #[test]
    fn test_millions() {
        assert_eq!(
            number_to_words(999_999_999),
            "Nine Hundred Ninety Nine Million Nine Hundred Ninety Nine Thousand \
             Nine Hundred Ninety Nine"
        );
    }

    #[test]
    fn test_extended_scales() {
        assert_eq!(number_to_words(1_000_000_000), "One Billion");
        assert_eq!(
            number_to_words(1_000_000_000_000),
            "One Trillion"
        );
        assert_eq!(
            number_to_words(5_000_000_002_000),
            "Five Trillion Two Thousand"
        );
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(number_to_words(-5), "Negative Five");
        assert_eq!(number_to_words(-100), "Negative One Hundred");
        assert_eq!(
            number_to_words(-1994),
            "Negative One Thousand Nine Hundred Ninety Four"
        );
    }

    #[test]
    fn test_i64_extremes_render() {
        assert_eq!(
            number_to_words(i64::MAX),
            "Nine Quintillion Two Hundred Twenty Three Quadrillion Three Hundred \
             Seventy Two Trillion Thirty Six Billion Eight Hundred Fifty Four \
             Million Seven Hundred Seventy Five Thousand Eight Hundred Seven"
        );
        assert_eq!(
            number_to_words(i64::MIN),
            "Negative Nine Quintillion Two Hundred Twenty Three Quadrillion \
             Three Hundred Seventy Two Trillion Thirty Six Billion Eight Hundred \
             Fifty Four Million Seven Hundred Seventy Five Thousand Eight \
             Hundred Eight"
        );
    }

    #[test]
    fn test_no_leading_or_trailing_whitespace() {
        for n in [0, 7, -7, 100, 1000, 1_000_001, i64::MAX] {
            let words = number_to_words(n);
            assert_eq!(words, words.trim());
            assert!(!words.contains("  "), "double space in {words:?}");
        }
    }
}
