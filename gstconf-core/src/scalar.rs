//! Scalar text conversion.
//!
//! The event source delivers every value as text; the field being filled
//! decides how that text is read. Lenient conversion mirrors C
//! `atoi`/`atof`: the longest numeric prefix wins and text with no
//! numeric prefix reads as zero. Strict conversion requires the whole
//! scalar to be well formed.

use crate::config::Strictness;
use crate::field::{Field, FieldKind};

/// A converted field value, ready to be stored on an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Text(&'a str),
    Integer(i32),
    Float(f64),
    Flag(bool),
}

/// Convert `text` for `field`.
///
/// Returns `None` only in strict mode, when the text is malformed.
pub fn convert<'a>(field: Field, text: &'a str, strictness: Strictness) -> Option<Value<'a>> {
    match (field.kind(), strictness) {
        (FieldKind::Text, _) => Some(Value::Text(text)),
        (FieldKind::Integer, Strictness::Lenient) => Some(Value::Integer(lenient_integer(text))),
        (FieldKind::Integer, Strictness::Strict) => strict_integer(text).map(Value::Integer),
        (FieldKind::Float, Strictness::Lenient) => Some(Value::Float(lenient_float(text))),
        (FieldKind::Float, Strictness::Strict) => strict_float(text).map(Value::Float),
        (FieldKind::Flag, Strictness::Lenient) => Some(Value::Flag(text == "true")),
        (FieldKind::Flag, Strictness::Strict) => strict_flag(text).map(Value::Flag),
    }
}

/// `atoi`: skip leading whitespace, optional sign, longest digit prefix.
///
/// Saturates at the `i32` bounds instead of overflowing.
pub fn lenient_integer(text: &str) -> i32 {
    let bytes = skip_space(text.as_bytes());
    let (negative, rest) = split_sign(bytes);

    let mut result: i64 = 0;
    for &b in rest {
        match b {
            b'0'..=b'9' => {
                result = result.saturating_mul(10).saturating_add((b - b'0') as i64);
            }
            _ => break,
        }
    }

    if negative {
        result = -result;
    }
    result.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// `atof`: skip leading whitespace and read the longest decimal prefix.
pub fn lenient_float(text: &str) -> f64 {
    let bytes = skip_space(text.as_bytes());
    let len = decimal_prefix_len(bytes);
    if len == 0 {
        return 0.0;
    }
    // The prefix is ASCII by construction.
    std::str::from_utf8(&bytes[..len])
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.0)
}

/// Whole-string base-10 integer within `i32`.
pub fn strict_integer(text: &str) -> Option<i32> {
    let (negative, rest) = split_sign(text.as_bytes());
    if rest.is_empty() {
        return None;
    }

    let mut result: i64 = 0;
    for &b in rest {
        match b {
            b'0'..=b'9' => {
                result = result.checked_mul(10)?.checked_add((b - b'0') as i64)?;
            }
            _ => return None,
        }
    }

    if negative {
        result = -result;
    }
    i32::try_from(result).ok()
}

/// Whole-string decimal number (no `inf`/`nan` spellings).
pub fn strict_float(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.is_empty() || decimal_prefix_len(bytes) != bytes.len() {
        return None;
    }
    text.parse().ok()
}

/// Exactly `true` or `false`.
pub fn strict_flag(text: &str) -> Option<bool> {
    match text {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn skip_space(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c))
        .unwrap_or(bytes.len());
    &bytes[start..]
}

fn split_sign(bytes: &[u8]) -> (bool, &[u8]) {
    match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    }
}

/// Length of the longest prefix of the form `[+-]d*[.d*][(e|E)[+-]d+]`
/// containing at least one mantissa digit, or 0.
fn decimal_prefix_len(bytes: &[u8]) -> usize {
    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut pos = match bytes.first() {
        Some(b'-') | Some(b'+') => 1,
        _ => 0,
    };

    let int_digits = digits(pos);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = digits(pos + 1);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    // Exponent only counts when it carries digits.
    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'-') | Some(b'+')) {
            exp += 1;
        }
        let exp_digits = digits(exp);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    pos
}
