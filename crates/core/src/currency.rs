//! pt-BR currency formatting for report presentation.
//!
//! Values are rendered the way `Intl` renders `style: 'currency'` for the
//! `pt-BR`/`BRL` pair: `R$ 1.234.567,89` (thousands separated by `.`,
//! decimals by `,`, always two decimal places).

/// Format a BRL amount for display.
pub fn format_brl(value: f64) -> String {
    let negative = value < 0.0;
    // Two-decimal rounding happens here and only here; the estimator
    // itself never rounds.
    let cents = (value.abs() * 100.0).round() as u64;
    let integer = cents / 100;
    let fraction = cents % 100;

    let digits = integer.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{fraction:02}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
    }

    #[test]
    fn no_grouping_below_one_thousand() {
        assert_eq!(format_brl(999.99), "R$ 999,99");
    }

    #[test]
    fn thousands_grouped_with_dots() {
        assert_eq!(format_brl(1234.5), "R$ 1.234,50");
        assert_eq!(format_brl(500_000.0), "R$ 500.000,00");
        assert_eq!(format_brl(1_234_567.89), "R$ 1.234.567,89");
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(format_brl(0.005), "R$ 0,01");
        assert_eq!(format_brl(1999.999), "R$ 2.000,00");
    }

    #[test]
    fn negative_values_keep_the_sign() {
        assert_eq!(format_brl(-1500.0), "-R$ 1.500,00");
    }
}
