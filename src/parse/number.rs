//! Number lexeme validation and conversion.
//!
//! number = [ minus ] int [ frac ] [ exp ]
//! int    = zero / ( digit1-9 *DIGIT )
//! frac   = decimal-point 1*DIGIT
//! exp    = e [ minus / plus ] 1*DIGIT

use crate::cursor::{Cursor, is_whitespace};
use crate::error::{Error, ErrorKind, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Initial,
    Signed,
    LeadingZero,
    Integer,
    Point,
    Fraction,
    Exponent,
    ExponentSigned,
    ExponentDigits,
    Accept,
}

impl State {
    /// States in which end of input completes a number.
    fn is_final(self) -> bool {
        matches!(
            self,
            State::LeadingZero | State::Integer | State::Fraction | State::ExponentDigits
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    NonZeroDigit,
    Zero,
    Exponent,
    Point,
    Plus,
    Minus,
    Space,
    Terminator,
    Illegal,
}

fn classify(b: u8) -> Class {
    match b {
        b'1'..=b'9' => Class::NonZeroDigit,
        b'0' => Class::Zero,
        b'e' | b'E' => Class::Exponent,
        b'.' => Class::Point,
        b'+' => Class::Plus,
        b'-' => Class::Minus,
        b']' | b'}' | b',' => Class::Terminator,
        _ if is_whitespace(b) => Class::Space,
        _ => Class::Illegal,
    }
}

fn transition(state: State, class: Class) -> Option<State> {
    use Class as C;
    use State as S;

    let next = match (state, class) {
        (S::Initial, C::Minus) => S::Signed,
        (S::Initial | S::Signed, C::Zero) => S::LeadingZero,
        (S::Initial | S::Signed, C::NonZeroDigit) => S::Integer,

        (S::Integer, C::Zero | C::NonZeroDigit) => S::Integer,
        (S::LeadingZero | S::Integer, C::Point) => S::Point,

        (S::Point | S::Fraction, C::Zero | C::NonZeroDigit) => S::Fraction,

        (S::LeadingZero | S::Integer | S::Fraction, C::Exponent) => S::Exponent,
        (S::Exponent, C::Plus | C::Minus) => S::ExponentSigned,
        (S::Exponent | S::ExponentSigned | S::ExponentDigits, C::Zero | C::NonZeroDigit) => {
            S::ExponentDigits
        }

        (S::LeadingZero | S::Integer | S::Fraction | S::ExponentDigits, C::Space | C::Terminator) => {
            S::Accept
        }
        _ => return None,
    };
    Some(next)
}

/// Length of the number lexeme at the start of `input`, or `None` when the
/// bytes do not form a complete number followed by a valid terminator.
fn scan(input: &[u8]) -> Option<usize> {
    let mut state = State::Initial;
    for (i, &b) in input.iter().enumerate() {
        match transition(state, classify(b))? {
            State::Accept => return Some(i),
            next => state = next,
        }
    }
    state.is_final().then_some(input.len())
}

/// A zero result is only legitimate when every mantissa digit is zero.
fn has_nonzero_mantissa(lexeme: &str) -> bool {
    lexeme
        .bytes()
        .take_while(|b| !matches!(b, b'e' | b'E'))
        .any(|b| b.is_ascii_digit() && b != b'0')
}

pub(super) fn number(cur: &mut Cursor<'_>) -> Result<f64> {
    let start = cur.offset();
    let rest = cur.rest();
    let invalid = || Error::new(ErrorKind::InvalidValue, start);

    let len = scan(rest).ok_or_else(invalid)?;
    if len == 0 {
        return Err(invalid());
    }

    let lexeme = std::str::from_utf8(&rest[..len]).map_err(|_| invalid())?;
    let n: f64 = lexeme.parse().map_err(|_| invalid())?;
    if n.is_infinite() || (n == 0.0 && has_nonzero_mantissa(lexeme)) {
        return Err(Error::new(ErrorKind::NumberOutOfRange, start));
    }

    cur.advance(len);
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_number(input: &str) -> Result<f64> {
        number(&mut Cursor::new(input.as_bytes()))
    }

    #[test]
    fn scan_stops_before_terminator() {
        assert_eq!(scan(b"12,3"), Some(2));
        assert_eq!(scan(b"0]"), Some(1));
        assert_eq!(scan(b"-1.5e3}"), Some(6));
        assert_eq!(scan(b"7\n"), Some(1));
        assert_eq!(scan(b"42"), Some(2));
    }

    #[test]
    fn scan_rejects_malformed() {
        for input in [
            "", "-", "+1", "01", "1.", ".5", "1e", "1e+", "1.e3", "--1", "1x", "0x10", "1:",
        ] {
            assert_eq!(scan(input.as_bytes()), None, "{input:?} should be rejected");
        }
    }

    #[test]
    fn zero_accepts_fraction_and_exponent() {
        assert_eq!(scan(b"0.0"), Some(3));
        assert_eq!(scan(b"0e5"), Some(3));
        assert_eq!(scan(b"-0E-0"), Some(5));
    }

    #[test]
    fn parse_values() {
        assert_eq!(parse_number("0").unwrap(), 0.0);
        assert_eq!(parse_number("-1.5").unwrap(), -1.5);
        assert_eq!(parse_number("3.1416").unwrap(), 3.1416);
        assert_eq!(parse_number("1E+10").unwrap(), 1e10);
        assert_eq!(parse_number("1.234E-10").unwrap(), 1.234e-10);
    }

    #[test]
    fn negative_zero_keeps_sign() {
        let n = parse_number("-0").unwrap();
        assert_eq!(n, 0.0);
        assert!(n.is_sign_negative());
    }

    #[test]
    fn advances_past_lexeme_only() {
        let mut cur = Cursor::new(b"12 ");
        assert_eq!(number(&mut cur).unwrap(), 12.0);
        assert_eq!(cur.offset(), 2);
    }

    #[test]
    fn out_of_range() {
        for input in ["1e309", "-1e309", "1e-10000"] {
            let err = parse_number(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NumberOutOfRange, "{input}");
            assert_eq!(err.offset(), 0);
        }
    }

    #[test]
    fn zero_with_huge_negative_exponent_is_zero() {
        assert_eq!(parse_number("0e-10000").unwrap(), 0.0);
    }

    #[test]
    fn subnormals_are_in_range() {
        assert_eq!(
            parse_number("4.9406564584124654e-324").unwrap(),
            4.9406564584124654e-324
        );
        assert_eq!(
            parse_number("1.7976931348623157e+308").unwrap(),
            1.7976931348623157e+308
        );
    }

    #[test]
    fn invalid_is_invalid_value() {
        let err = parse_number("0123").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }
}
