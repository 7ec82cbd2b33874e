//! Currency formatting for reports

/// Format an amount in ringgit with thousands separators: `RM 1,234.56`
pub fn format_ringgit(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("RM {}", amount);
    }

    let formatted = format!("{:.2}", amount.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.00 prints without a sign
    let sign = if amount < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}RM {}.{}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_ringgit(0.0), "RM 0.00");
        assert_eq!(format_ringgit(999.5), "RM 999.50");
        assert_eq!(format_ringgit(1_000.0), "RM 1,000.00");
        assert_eq!(format_ringgit(1_234_567.891), "RM 1,234,567.89");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_ringgit(-2_500.0), "-RM 2,500.00");
        assert_eq!(format_ringgit(-0.001), "RM 0.00");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_ringgit(f64::NAN), "RM NaN");
    }
}
