//! SI-prefixed quantities
//!
//! Parses engineering notation ("4k7", "5p", "2R2", "50 kΩ") and formats
//! values back with a metric prefix. Also tokenizes free-text sample lists.

use crate::error::AdcError;

const PREFIXES: [(f64, &str); 10] = [
    (1e12, "T"),
    (1e9, "G"),
    (1e6, "M"),
    (1e3, "k"),
    (1.0, ""),
    (1e-3, "m"),
    (1e-6, "µ"),
    (1e-9, "n"),
    (1e-12, "p"),
    (1e-15, "f"),
];

fn multiplier(suffix: char) -> Option<f64> {
    let m = match suffix {
        'T' => 1e12,
        'G' => 1e9,
        'M' => 1e6,
        'K' | 'k' => 1e3,
        'm' => 1e-3,
        'u' | 'µ' => 1e-6,
        'n' => 1e-9,
        'p' => 1e-12,
        'f' => 1e-15,
        _ => return None,
    };
    Some(m)
}

/// Strip separators and resistance units
fn normalize(raw: &str) -> String {
    let mut s: String = raw
        .trim()
        .chars()
        .filter(|&c| !matches!(c, ',' | ' ' | '_' | 'Ω'))
        .collect();

    // First "ohm"/"ohms", any case
    let lower = s.to_ascii_lowercase();
    if let Some(pos) = lower.find("ohm") {
        let end = if lower[pos + 3..].starts_with('s') { pos + 4 } else { pos + 3 };
        s.replace_range(pos..end, "");
    }

    if s == "+" || s == "-" {
        s.clear();
    }
    s
}

/// Length of a leading `[+-]?digits*(.digits+)?` mantissa
fn mantissa_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i + 1 < bytes.len() && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    i
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// "12k", "3.3", "-5m"
fn parse_suffixed(s: &str) -> Option<f64> {
    let split = mantissa_len(s);
    let (num, rest) = s.split_at(split);
    if num.is_empty() {
        return None;
    }

    let mut rest_chars = rest.chars();
    let mult = match (rest_chars.next(), rest_chars.next()) {
        (None, _) => 1.0,
        (Some(c), None) => multiplier(c)?,
        _ => return None,
    };

    let value: f64 = num.parse().ok()?;
    finite(value * mult)
}

/// "4k7" = 4.7e3, "2R2" = 2.2
fn parse_infix(s: &str) -> Option<f64> {
    let sign_len = usize::from(s.starts_with(&['+', '-'][..]));
    let digits_end = sign_len
        + s[sign_len..]
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
    if digits_end == sign_len {
        return None;
    }

    let whole = &s[..digits_end];
    let mut rest = s[digits_end..].chars();
    let mark = rest.next()?;
    let frac = rest.as_str();
    if !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mult = if mark == 'R' { 1.0 } else { multiplier(mark)? };
    let frac = if frac.is_empty() { "0" } else { frac };
    let value: f64 = format!("{}.{}", whole, frac).parse().ok()?;
    finite(value * mult)
}

/// Parse an SI-prefixed quantity
///
/// Returns `None` for empty, malformed, or non-finite input.
pub fn parse_si(raw: &str) -> Option<f64> {
    let s = normalize(raw);
    if s.is_empty() {
        return None;
    }

    parse_suffixed(&s)
        .or_else(|| parse_infix(&s))
        .or_else(|| s.parse::<f64>().ok().and_then(finite))
}

/// Parse an SI-prefixed quantity, reporting the offending text on failure
pub fn parse_si_strict(raw: &str) -> Result<f64, AdcError> {
    parse_si(raw).ok_or_else(|| AdcError::InvalidQuantity(raw.to_string()))
}

/// Format a value with a metric prefix
///
/// # Arguments
/// * `value` - Value to format; non-finite values render as "—"
/// * `unit` - Unit appended after the prefix
/// * `digits` - Significant digits for values below 10 (after scaling)
pub fn format_si(value: f64, unit: &str, digits: usize) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }

    let abs = value.abs();
    let (scale, prefix) = PREFIXES
        .iter()
        .copied()
        .find(|&(m, _)| abs >= m)
        .unwrap_or((1.0, ""));

    let v = value / scale;
    let decimals = if v.abs() >= 100.0 {
        0
    } else if v.abs() >= 10.0 {
        1
    } else {
        digits.saturating_sub(1)
    };

    // Exact ties round away from zero
    let step = 10f64.powi(decimals as i32);
    let rounded = (v * step).round() / step;

    format!("{:.*}{}{}", decimals, rounded, prefix, unit)
}

/// Split free text on whitespace, commas and semicolons and parse each token
///
/// Tokens that are not finite numbers are dropped.
pub fn parse_samples(text: &str) -> Vec<f64> {
    text.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|tok| !tok.is_empty())
        .filter_map(parse_si)
        .collect()
}
