//! Currency conversion against USD-relative rates.

use crate::rates::RateBook;

/// Rounds to 4 decimal places, half-up, with an epsilon nudge so values that
/// sit just below a rounding boundary due to float error land on it.
pub fn round4(value: f64) -> f64 {
    ((value + f64::EPSILON) * 10_000.0 + 0.5).floor() / 10_000.0
}

/// Converts `amount` from one currency to another by normalizing through USD.
///
/// Returns `None` when either code is missing from the rate book. A zero rate
/// is treated as missing since it cannot be a divisor.
pub fn convert(amount: f64, from: &str, to: &str, rates: &RateBook) -> Option<f64> {
    let from_rate = rates.get(from).filter(|&r| r != 0.0)?;
    let to_rate = rates.get(to).filter(|&r| r != 0.0)?;
    let amount_in_usd = amount / from_rate;
    Some(round4(amount_in_usd * to_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::CurrencyRow;

    fn book(entries: &[(&str, f64)]) -> RateBook {
        let rows: Vec<CurrencyRow> = entries
            .iter()
            .map(|&(code, rate)| CurrencyRow {
                code: code.to_string(),
                rate,
            })
            .collect();
        RateBook::from_rows(&rows)
    }

    #[test]
    fn converts_through_usd_base() {
        let rates = book(&[("USD", 1.0), ("EUR", 0.9)]);
        assert_eq!(convert(10.0, "USD", "EUR", &rates), Some(9.0));
    }

    #[test]
    fn converts_between_non_usd_codes() {
        let rates = book(&[("USD", 1.0), ("EUR", 0.9), ("GBP", 0.79)]);
        // 10 EUR -> 11.1111 USD -> 8.7778 GBP
        assert_eq!(convert(10.0, "EUR", "GBP", &rates), Some(8.7778));
    }

    #[test]
    fn unknown_code_yields_none() {
        let rates = book(&[("USD", 1.0)]);
        assert_eq!(convert(10.0, "USD", "XXX", &rates), None);
        assert_eq!(convert(10.0, "XXX", "USD", &rates), None);
    }

    #[test]
    fn zero_rate_is_treated_as_missing() {
        let rates = book(&[("USD", 1.0), ("BAD", 0.0)]);
        assert_eq!(convert(10.0, "BAD", "USD", &rates), None);
        assert_eq!(convert(10.0, "USD", "BAD", &rates), None);
    }

    #[test]
    fn rounds_half_up_to_four_decimals() {
        assert_eq!(round4(0.12345), 0.1235);
        assert_eq!(round4(0.12344), 0.1234);
        assert_eq!(round4(1.0), 1.0);
    }

    #[test]
    fn identity_conversion_is_exact() {
        let rates = book(&[("USD", 1.0), ("EUR", 0.9)]);
        assert_eq!(convert(123.45, "EUR", "EUR", &rates), Some(123.45));
    }
}
