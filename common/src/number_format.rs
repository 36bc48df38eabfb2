//! Number formatting for count columns.

use crate::product_const::COUNT_UNIT;


/// Format with comma thousands separators: `1234567` -> `"1,234,567"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// Review count cell text, e.g. `"1,520건"`.
pub fn format_review_count(value: u64) -> String {
    format!("{}{}", format_count(value), COUNT_UNIT)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(123456), "123,456");
        assert_eq!(format_count(1234567), "1,234,567");
        assert_eq!(format_count(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_format_review_count() {
        assert_eq!(format_review_count(1520), "1,520건");
        assert_eq!(format_review_count(3), "3건");
    }
}
