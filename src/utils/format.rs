//! Number and date formatting for metric labels and tables.
//!
//! Thousands are separated with a plain space (`16 317`), the decimal
//! separator is a dot, and precision is fixed per call site.

use chrono::{Datelike, NaiveDate};

const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Groups the digits of an integer by thousands.
///
/// # Examples
///
/// ```
/// use linkinvet::utils::format::group_thousands;
///
/// assert_eq!(group_thousands(16317), "16 317");
/// assert_eq!(group_thousands(4), "4");
/// ```
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        out.push('-');
    }

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }

    out
}

/// Formats `value` with `places` decimals and a grouped integer part.
///
/// # Examples
///
/// ```
/// use linkinvet::utils::format::format_decimal;
///
/// assert_eq!(format_decimal(16946.8, 1), "16 946.8");
/// assert_eq!(format_decimal(3.409_766, 2), "3.41");
/// ```
pub fn format_decimal(value: f64, places: usize) -> String {
    let fixed = format!("{value:.places$}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::from(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Formats a percentage, e.g. `59.7%`.
pub fn format_percent(value: f64, places: usize) -> String {
    format!("{}%", format_decimal(value, places))
}

/// Long French date, e.g. `26 septembre 2024`.
pub fn french_date(date: NaiveDate) -> String {
    let month = FRENCH_MONTHS[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}
