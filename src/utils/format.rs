//! Format - Formatting Utilities

use chrono::{DateTime, Local, Utc};

/// Format a UTC datetime for display
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = dt.with_timezone(&Local);
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format just the date portion
pub fn format_date(dt: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = dt.with_timezone(&Local);
    local.format("%Y-%m-%d").to_string()
}

/// Format an amount as dollars with thousand separators, e.g. `$1,234.56`.
///
/// Negative amounts render as `-$1,234.56`.
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;
    let grouped = group_thousands(whole);
    if negative {
        format!("-${grouped}.{frac:02}")
    } else {
        format!("${grouped}.{frac:02}")
    }
}

/// Format a signed transaction amount with its direction sign
pub fn format_signed_money(amount: f64, credit: bool) -> String {
    let money = format_money(amount.abs());
    if credit {
        format!("+{money}")
    } else {
        format!("-{money}")
    }
}

/// Truncate a string to max length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    }
}

fn group_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let len = s.len();
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money_basic() {
        assert_eq!(format_money(80.0), "$80.00");
        assert_eq!(format_money(0.0), "$0.00");
    }

    #[test]
    fn test_format_money_thousands() {
        assert_eq!(format_money(1234.56), "$1,234.56");
        assert_eq!(format_money(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn test_format_money_rounds_cents() {
        assert_eq!(format_money(9.999), "$10.00");
    }

    #[test]
    fn test_format_money_negative() {
        assert_eq!(format_money(-42.5), "-$42.50");
    }

    #[test]
    fn test_format_signed_money() {
        assert_eq!(format_signed_money(25.0, true), "+$25.00");
        assert_eq!(format_signed_money(25.0, false), "-$25.00");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer string", 9), "a long...");
    }
}
