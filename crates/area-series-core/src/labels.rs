//! Presentation helpers: compact numbers and chart labels.

use chrono::NaiveDate;

/// Significant digits used for millions.
const MILLION_SIG_DIGITS: i32 = 3;

/// Render a count compactly for display.
///
/// - below 10,000: the plain integer (`9876`);
/// - below 1,000,000: thousands with one decimal (`12.3k`);
/// - otherwise: millions to three significant digits (`1.23m`, `45m`).
///
/// ```
/// use area_series_core::format_count;
///
/// assert_eq!(format_count(9_999), "9999");
/// assert_eq!(format_count(12_345), "12.3k");
/// assert_eq!(format_count(1_234_567), "1.23m");
/// ```
pub fn format_count(n: i64) -> String {
    if n < 10_000 {
        n.to_string()
    } else if n < 1_000_000 {
        format!("{:.1}k", n as f64 / 1_000.0)
    } else {
        format!(
            "{}m",
            significant(n as f64 / 1_000_000.0, MILLION_SIG_DIGITS)
        )
    }
}

/// Format a positive value to `sig` significant digits, `%g` style:
/// trailing zeros are trimmed, and exponent form is used once the value
/// has more integer digits than `sig`.
///
/// The exponent comes from the `{:e}` rendering, which rounds the exact
/// binary value with ties to even, so carries (9.996 -> 1.00e1) are seen.
fn significant(value: f64, sig: i32) -> String {
    let scientific = format!("{:.*e}", (sig - 1) as usize, value);
    let (mantissa, exp) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exp < -4 || exp >= sig {
        let sign = if exp < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa.to_string()),
            exp.abs()
        )
    } else {
        let decimals = (sig - 1 - exp).max(0) as usize;
        trim_fraction(format!("{value:.decimals$}"))
    }
}

fn trim_fraction(s: String) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Short chart label for a date, e.g. "Jan 2".
pub fn date_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Labels "Day 1" through "Day {count}", for charts aligned on a common
/// starting threshold (see [`Series::deaths_from`](crate::Series::deaths_from)).
pub fn day_labels(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Day {i}")).collect()
}
