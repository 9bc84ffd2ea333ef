//! Display formatting for costs, distances and durations.
//!
//! US-style output: `,` thousands separators, `.` decimal point, `$` prefix.
//! Non-finite values (a cost per mile at zero miles, for instance) render as
//! [`NOT_AVAILABLE`] instead of `inf` or `NaN`.

/// Placeholder shown for values that are undefined at the given input.
pub const NOT_AVAILABLE: &str = "—";

/// Formats `value` with `decimals` fraction digits and thousands separators.
///
/// # Example
///
/// ```
/// use breakeven::format::number;
///
/// assert_eq!(number(1_234_567.891, 2), "1,234,567.89");
/// assert_eq!(number(-4_200.0, 0), "-4,200");
/// assert_eq!(number(f64::NAN, 2), "—");
/// ```
#[must_use]
pub fn number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::with_capacity(formatted.len() + int_part.len() / 3 + 1);
    // No sign when the value rounds to zero.
    if value < 0.0 && formatted.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Dollar amount with `decimals` fraction digits, e.g. `$35,000.00`.
#[must_use]
pub fn currency_with(value: f64, decimals: usize) -> String {
    let body = number(value, decimals);
    if body == NOT_AVAILABLE {
        body
    } else if let Some(magnitude) = body.strip_prefix('-') {
        format!("-${magnitude}")
    } else {
        format!("${body}")
    }
}

/// Dollar amount in cents, e.g. `$35,000.00`.
#[must_use]
pub fn currency(value: f64) -> String {
    currency_with(value, 2)
}

/// Whole-dollar amount, e.g. `$35,000`. Used for axis labels.
#[must_use]
pub fn currency_whole(value: f64) -> String {
    currency_with(value, 0)
}

/// Cost per mile to a tenth of a cent, e.g. `$0.350`.
#[must_use]
pub fn cost_per_mile(value: f64) -> String {
    currency_with(value, 3)
}

/// Whole miles with separators, e.g. `100,000`.
#[must_use]
pub fn miles(value: f64) -> String {
    number(value, 0)
}

/// Years to one decimal place, e.g. `6.7`.
#[must_use]
pub fn years(value: f64) -> String {
    number(value, 1)
}
