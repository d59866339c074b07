//! Display formatting for estimated salaries.

use rust_decimal::{Decimal, RoundingStrategy};

/// Renders a salary as `{label}{amount}` with comma thousands separators.
///
/// The amount is rounded to a whole number first. The label is attached
/// verbatim, so multi-letter labels carry no space.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::format_salary;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_salary(Decimal::from(45000), "£"), "£45,000");
/// assert_eq!(format_salary(Decimal::from(480000), "AED"), "AED480,000");
/// ```
pub fn format_salary(amount: Decimal, currency_label: &str) -> String {
    let whole = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = whole.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if whole.is_sign_negative() && !whole.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}{}", sign, currency_label, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_small_amount_has_no_separator() {
        assert_eq!(format_salary(Decimal::from(950), "$"), "$950");
        assert_eq!(format_salary(Decimal::ZERO, "€"), "€0");
    }

    #[test]
    fn test_millions() {
        assert_eq!(format_salary(Decimal::from(1541074), "HK$"), "HK$1,541,074");
    }

    #[test]
    fn test_exact_thousand_boundaries() {
        assert_eq!(format_salary(Decimal::from(100000), "S$"), "S$100,000");
        assert_eq!(format_salary(Decimal::from(1000), "A$"), "A$1,000");
    }

    #[test]
    fn test_fractional_amount_is_rounded() {
        let amount = Decimal::from_str("64398.50").unwrap();
        assert_eq!(format_salary(amount, "£"), "£64,399");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_salary(Decimal::from(-1200), "£"), "-£1,200");
    }
}
