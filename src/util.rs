// Utility helpers for parsing and number formatting.
//
// This module centralizes all the "dirty" CSV/number/date handling so the
// rest of the code can assume clean, typed values.
use chrono::NaiveDate;
use num_format::Locale;

/// Date layouts accepted in the `Date` column, tried in order. ISO layouts
/// stay year-first; every other layout is day-first.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d/%m/%y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%d/%m/%Y %H:%M:%S"];

/// Treat empty or whitespace-only cells the same as absent ones.
pub fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}

/// Parse a string-like value into `f64` while being forgiving about
/// formatting issues that are common in CSV exports (commas, spaces, text).
///
/// - Trims whitespace.
/// - Strips thousands separators like `","` before parsing.
/// - Accepts scientific notation (`1e3`, `1.5E2`).
/// - Returns `None` for text (`N/A`), `nan` and infinities.
pub fn parse_f64_safe(s: Option<&str>) -> Option<f64> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    s.replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Numeric cell with the zero fallback used for rates, hours and costs.
pub fn parse_f64_or_zero(s: Option<&str>) -> f64 {
    parse_f64_safe(s).unwrap_or(0.0)
}

pub fn parse_date_safe(s: Option<&str>) -> Option<NaiveDate> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS.iter().find_map(|fmt| {
                chrono::NaiveDateTime::parse_from_str(s, fmt)
                    .ok()
                    .map(|dt| dt.date())
            })
        })
}

/// Format a quantity (hours, rate) the way a spreadsheet user expects to
/// read it back: shortest round-trip form, always with a fractional part.
pub fn format_quantity(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e16 {
        format!("{:.1}", n)
    } else {
        format!("{}", n)
    }
}

/// Fixed decimals with `en` thousands separators, e.g. `1,234,567.89`.
///
/// Digits are grouped from the rendered string, so amounts beyond any
/// integer type keep every digit.
pub fn format_number(n: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, n.abs());
    let (digits, frac) = match rendered.split_once('.') {
        Some((digits, frac)) => (digits, Some(frac)),
        None => (rendered.as_str(), None),
    };

    let mut res = String::with_capacity(rendered.len() + digits.len() / 3 + 1);
    // No sign on amounts that round to zero.
    if n < 0.0 && rendered.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        res.push('-');
    }
    group_thousands(digits, Locale::en.separator(), &mut res);
    if let Some(frac) = frac {
        res.push('.');
        res.push_str(frac);
    }
    res
}

fn group_thousands(digits: &str, separator: &str, out: &mut String) {
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
}

/// Money amounts: thousands separators and exactly two decimals.
pub fn format_money(n: f64) -> String {
    format_number(n, 2)
}
