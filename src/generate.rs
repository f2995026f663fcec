use std::fmt::{self, Write};

use tracing::trace;

use crate::error::StringifyError;
use crate::value::Value;

/// Integral values below this magnitude are exact and print without a fraction.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0; // 2^53

/// What to do with NaN and the infinities, which JSON cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NonFinite {
    Reject,
    /// Write `null` in their place.
    Null,
}

pub(crate) fn stringify(value: &Value) -> Result<String, StringifyError> {
    let mut out = String::new();
    write_value(&mut out, value, NonFinite::Reject)?;
    trace!(kind = %value.kind(), len = out.len(), "stringified value");
    Ok(out)
}

pub(crate) fn write_value<W: Write>(
    out: &mut W,
    value: &Value,
    non_finite: NonFinite,
) -> Result<(), StringifyError> {
    match value {
        Value::Null => out.write_str("null")?,
        Value::Boolean(true) => out.write_str("true")?,
        Value::Boolean(false) => out.write_str("false")?,
        Value::Number(n) => write_number(out, *n, non_finite)?,
        Value::String(s) => write_string(out, s)?,
        Value::Array(arr) => {
            out.write_char('[')?;
            for (i, v) in arr.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write_value(out, v, non_finite)?;
            }
            out.write_char(']')?;
        }
        Value::Object(obj) => {
            out.write_char('{')?;
            for (i, (k, v)) in obj.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write_string(out, k)?;
                out.write_char(':')?;
                write_value(out, v, non_finite)?;
            }
            out.write_char('}')?;
        }
    }
    Ok(())
}

fn write_number<W: Write>(
    out: &mut W,
    n: f64,
    non_finite: NonFinite,
) -> Result<(), StringifyError> {
    if !n.is_finite() {
        return match non_finite {
            NonFinite::Reject => Err(StringifyError::NonFiniteNumber(n)),
            NonFinite::Null => Ok(out.write_str("null")?),
        };
    }

    if n == 0.0 && n.is_sign_negative() {
        out.write_str("-0")?;
    } else if n.fract() == 0.0 && n.abs() < MAX_EXACT_INT {
        out.write_str(itoa::Buffer::new().format(n as i64))?;
    } else {
        out.write_str(ryu::Buffer::new().format_finite(n))?;
    }
    Ok(())
}

/// Writes `s` quoted. Only `"`, `\` and control bytes are escaped; everything
/// else, including `/` and non-ASCII text, passes through as is.
fn write_string<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;

    let mut start = 0;
    for (i, b) in s.bytes().enumerate() {
        let escape = match b {
            b'"' => "\\\"",
            b'\\' => "\\\\",
            b'\x08' => "\\b",
            b'\x0C' => "\\f",
            b'\n' => "\\n",
            b'\r' => "\\r",
            b'\t' => "\\t",
            0x00..=0x1F => {
                out.write_str(&s[start..i])?;
                write!(out, "\\u{:04X}", b)?;
                start = i + 1;
                continue;
            }
            _ => continue,
        };
        out.write_str(&s[start..i])?;
        out.write_str(escape)?;
        start = i + 1;
    }
    out.write_str(&s[start..])?;

    out.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Map;

    fn render(value: &Value) -> String {
        stringify(value).unwrap()
    }

    #[test]
    fn literals() {
        assert_eq!(render(&Value::Null), "null");
        assert_eq!(render(&Value::Boolean(true)), "true");
        assert_eq!(render(&Value::Boolean(false)), "false");
    }

    #[test]
    fn integral_numbers_have_no_fraction() {
        assert_eq!(render(&Value::Number(0.0)), "0");
        assert_eq!(render(&Value::Number(-0.0)), "-0");
        assert_eq!(render(&Value::Number(123.0)), "123");
        assert_eq!(render(&Value::Number(-1e10)), "-10000000000");
        assert_eq!(render(&Value::Number(9007199254740991.0)), "9007199254740991");
    }

    #[test]
    fn fractional_numbers_use_shortest_form() {
        assert_eq!(render(&Value::Number(3.1416)), "3.1416");
        assert_eq!(render(&Value::Number(0.1)), "0.1");
        assert_eq!(render(&Value::Number(-1.5)), "-1.5");
        assert_eq!(render(&Value::Number(1e300)), "1e300");
        assert_eq!(render(&Value::Number(1.234e-10)), "1.234e-10");
    }

    #[test]
    fn non_finite_numbers_fail() {
        for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = stringify(&Value::Array(vec![Value::Number(n)])).unwrap_err();
            assert!(matches!(err, StringifyError::NonFiniteNumber(_)));
        }
    }

    #[test]
    fn non_finite_numbers_as_null() {
        let v = Value::Array(vec![Value::Number(f64::NAN), Value::Number(f64::INFINITY)]);
        let mut out = String::new();
        write_value(&mut out, &v, NonFinite::Null).unwrap();
        assert_eq!(out, "[null,null]");
    }

    #[test]
    fn string_escapes() {
        let s = Value::from("\" \\ / \x08 \x0c \n \r \t");
        assert_eq!(render(&s), r#""\" \\ / \b \f \n \r \t""#);
    }

    #[test]
    fn control_bytes_use_uppercase_hex() {
        let s = Value::from("a\x01\x1fb\0");
        assert_eq!(render(&s), "\"a\\u0001\\u001Fb\\u0000\"");
    }

    #[test]
    fn non_ascii_passes_through() {
        let s = Value::from("caf\u{e9} \u{1d11e}");
        assert_eq!(render(&s), "\"caf\u{e9} \u{1d11e}\"");
    }

    #[test]
    fn empty_containers() {
        assert_eq!(render(&Value::Array(vec![])), "[]");
        assert_eq!(render(&Value::Object(Map::new())), "{}");
        assert_eq!(render(&Value::from("")), "\"\"");
    }

    #[test]
    fn nested_containers() {
        let v: Value = [
            ("a", Value::Array(vec![Value::Number(1.0), Value::Null])),
            ("b\n", Value::Object(Map::new())),
        ]
        .into_iter()
        .collect();
        assert_eq!(render(&v), r#"{"a":[1,null],"b\n":{}}"#);
    }

    #[test]
    fn display_matches_stringify() {
        let v: Value = vec![Value::Boolean(true), Value::from("x")].into();
        assert_eq!(v.to_string(), render(&v));
    }
}
