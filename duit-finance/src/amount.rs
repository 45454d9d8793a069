//! Amount normalizer for Indonesian shorthand like "50rb", "1.5jt",
//! "2,5juta" or a plain "1.500.000".

use crate::error::AmountError;

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;
const BILLION: f64 = 1_000_000_000.0;

/// Magnitude multiplier implied by a suffix, if any.
///
/// Checked in priority order: thousands, then millions, then billions.
fn marker_multiplier(token: &str) -> Option<f64> {
    if token.contains("rb") || token.contains("ribu") || token.ends_with('k') {
        return Some(THOUSAND);
    }
    if token.contains("jt") || token.contains("juta") {
        return Some(MILLION);
    }
    if token.contains('m') || token.contains("milyar") {
        return Some(BILLION);
    }
    None
}

/// Parse the longest leading `digits[.digits]` run, ignoring trailing junk.
fn leading_decimal(s: &str) -> Option<f64> {
    let int_len = s.bytes().take_while(u8::is_ascii_digit).count();
    let rest = &s[int_len..];
    let frac_len = match rest.strip_prefix('.') {
        Some(after) => after.bytes().take_while(u8::is_ascii_digit).count(),
        None => 0,
    };
    if int_len == 0 && frac_len == 0 {
        return None;
    }
    let int_part = if int_len == 0 { "0" } else { &s[..int_len] };
    let literal = if frac_len > 0 {
        format!("{}.{}", int_part, &rest[1..=frac_len])
    } else {
        int_part.to_string()
    };
    literal.parse().ok()
}

/// Convert an amount token to a plain magnitude.
///
/// With a magnitude marker both `,` and `.` act as the decimal point
/// (`1.5jt`, `2,5juta`). Without one, `.` groups thousands and `,` is the
/// decimal point (`1.500.000`, `12.500,5`).
pub fn normalize_amount(token: &str) -> Result<f64, AmountError> {
    let cleaned: String = token
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let numeric: String = cleaned
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    if !numeric.bytes().any(|b| b.is_ascii_digit()) {
        return Err(AmountError::InvalidNumericLiteral(token.to_string()));
    }

    let (literal, multiplier) = match marker_multiplier(&cleaned) {
        Some(multiplier) => (numeric.replace(',', "."), multiplier),
        None => (numeric.replace('.', "").replace(',', "."), 1.0),
    };

    let value = leading_decimal(&literal)
        .ok_or_else(|| AmountError::InvalidNumericLiteral(token.to_string()))?;
    Ok(value * multiplier)
}
