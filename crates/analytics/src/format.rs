//! Numeric display policy.
//!
//! Rounding here is for presentation only. Values passed between the engines
//! keep full precision; these helpers run at the last step before text.

use chrono::NaiveDate;

/// Stock quantity as a whole-unit count (fractional units truncate toward zero).
pub fn whole_units(value: f64) -> i64 {
    value.trunc() as i64
}

/// Demand rate with two decimal digits.
pub fn demand_rate(value: f64) -> String {
    format!("{value:.2} units/day")
}

/// Integer with thousands separators (`1,234`).
pub fn grouped(value: i64) -> String {
    let digits = group_digits(&value.unsigned_abs().to_string());
    if value < 0 { format!("-{digits}") } else { digits }
}

/// Thousands-grouped unsigned count (`18,446,744,073,709,551,615`).
pub fn grouped_count(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Whole-dollar currency, rounded (`$1,235`, `-$40`).
pub fn currency(value: f64) -> String {
    let rounded = value.round();
    let digits = group_digits(&format!("{:.0}", rounded.abs()));
    sign(rounded) + "$" + &digits
}

/// Currency with cents (`$1,234.56`).
pub fn currency_cents(value: f64) -> String {
    let text = format!("{:.2}", value.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let negative = value < 0.0 && text.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let prefix = if negative { "-" } else { "" };
    format!("{prefix}${}.{cents}", group_digits(whole))
}

/// Axis tick in thousands of dollars (`$12k`).
pub fn thousands_tick(value: f64) -> String {
    format!("${:.0}k", value / 1000.0)
}

/// Day count with one decimal (`12.3 days`).
pub fn days(value: f64) -> String {
    format!("{value:.1} days")
}

/// Short axis label for a forecast date (`Mar 5`).
pub fn date_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

fn sign(value: f64) -> String {
    if value < 0.0 { "-".to_string() } else { String::new() }
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_units_truncates_toward_zero() {
        assert_eq!(whole_units(12.9), 12);
        assert_eq!(whole_units(0.4), 0);
        assert_eq!(whole_units(-1.7), -1);
    }

    #[test]
    fn demand_rate_keeps_two_decimals() {
        assert_eq!(demand_rate(1.0), "1.00 units/day");
        assert_eq!(demand_rate(3.14159), "3.14 units/day");
    }

    #[test]
    fn grouping_inserts_separators() {
        assert_eq!(grouped(0), "0");
        assert_eq!(grouped(999), "999");
        assert_eq!(grouped(1234), "1,234");
        assert_eq!(grouped(1234567), "1,234,567");
        assert_eq!(grouped(-45000), "-45,000");
        assert_eq!(grouped_count(1450), "1,450");
        assert_eq!(grouped_count(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn currency_formats() {
        assert_eq!(currency(1234.5), "$1,235");
        assert_eq!(currency(0.0), "$0");
        assert_eq!(currency(-40.2), "-$40");
        assert_eq!(currency_cents(1234.5), "$1,234.50");
        assert_eq!(currency_cents(-3.256), "-$3.26");
        assert_eq!(currency_cents(-0.001), "$0.00");
    }

    #[test]
    fn ticks_and_days() {
        assert_eq!(thousands_tick(12_400.0), "$12k");
        assert_eq!(thousands_tick(0.0), "$0k");
        assert_eq!(days(12.345), "12.3 days");
    }

    #[test]
    fn date_label_is_month_and_day() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(date_label(d), "Mar 5");
    }
}
