//! Numeric token scanner.
//!
//! Numbers in path data follow the classic floating literal grammar:
//! optional sign, digits, optional fraction, optional exponent. Tokens are
//! frequently packed with no separator at all (`1.5.5`, `10-20`, `1e2-3`),
//! so the scanner is greedy and stops at the first character that cannot
//! extend the token, leaving it for the caller.

/// States of the number scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberState {
    /// Nothing consumed yet.
    Start,
    /// Leading `+` or `-`.
    Sign,
    /// Integer digits.
    Whole,
    /// The `.` separating integer and fraction.
    DecimalPoint,
    /// Fraction digits.
    Decimal,
    /// The `e`/`E` exponent marker.
    E,
    /// Sign after the exponent marker.
    ExponentSign,
    /// Exponent digits.
    Exponent,
}

/// Advance the scanner by one character, or reject it.
pub fn transition(state: NumberState, c: char) -> Option<NumberState> {
    use NumberState::*;

    match (state, c) {
        (Start, '+' | '-') => Some(Sign),
        (E, '+' | '-') => Some(ExponentSign),
        (Start | Sign | Whole, '0'..='9') => Some(Whole),
        (DecimalPoint | Decimal, '0'..='9') => Some(Decimal),
        (E | ExponentSign | Exponent, '0'..='9') => Some(Exponent),
        (Start | Sign | Whole, '.') => Some(DecimalPoint),
        (Whole | DecimalPoint | Decimal, 'e' | 'E') => Some(E),
        _ => None,
    }
}

/// Read a number starting at byte offset `cursor`.
///
/// Returns the value and the offset just past the scanned token. A token
/// with no mantissa digits, or one whose value is not finite, is rejected.
/// A dangling exponent marker (`1e`, `2e+`) is consumed but does not
/// contribute to the value.
pub fn read_number(text: &str, cursor: usize) -> Option<(f64, usize)> {
    let bytes = text.as_bytes();
    let mut state = NumberState::Start;
    let mut end = cursor;
    let mut mantissa_end = None;

    while let Some(&byte) = bytes.get(end) {
        let Some(next) = transition(state, byte as char) else {
            break;
        };
        if next == NumberState::E {
            mantissa_end = Some(end);
        }
        state = next;
        end += 1;
    }

    let (mantissa, exponent) = match mantissa_end {
        Some(m) if state == NumberState::Exponent => (&text[cursor..m], &text[m..end]),
        Some(m) => (&text[cursor..m], ""),
        None => (&text[cursor..end], ""),
    };

    let value = parse_literal(mantissa, exponent)?;
    Some((value, end))
}

/// Normalize a scanned mantissa/exponent pair and convert it.
fn parse_literal(mantissa: &str, exponent: &str) -> Option<f64> {
    let (sign, digits) = match mantissa.as_bytes().first() {
        Some(b'+') | Some(b'-') => mantissa.split_at(1),
        _ => ("", mantissa),
    };

    if !digits.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits = digits.strip_suffix('.').unwrap_or(digits);
    let lead = if digits.starts_with('.') { "0" } else { "" };
    let literal = format!("{sign}{lead}{digits}{exponent}");

    literal.parse::<f64>().ok().filter(|v| v.is_finite())
}
