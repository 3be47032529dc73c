//! Display helpers shared by the exporters and the terminal views.

use crate::roi::PaybackPeriod;

/// US-dollar amount with thousands separators and no cents.
///
/// ```rust
/// use roicanvas::output::formatters::format_currency;
///
/// assert_eq!(format_currency(968_901.58), "$968,902");
/// assert_eq!(format_currency(-1234.0), "-$1,234");
/// ```
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits);

    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Percentage with an explicit sign for non-negative values.
pub fn format_percent(value: f64) -> String {
    // -0.0 would print as "+-0.0%"
    let value = if value == 0.0 { 0.0 } else { value };
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.1}%")
}

pub fn format_payback(payback: PaybackPeriod) -> String {
    payback.to_string()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
