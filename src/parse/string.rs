use crate::cursor::Cursor;
use crate::error::{Error, ErrorKind, Result};

/// Decodes the string literal at the cursor, which must sit on its opening `"`.
/// The cursor ends up just past the closing `"`.
pub(super) fn string(cur: &mut Cursor<'_>) -> Result<String> {
    let start = cur.offset();
    cur.bump();

    let mut buf: Vec<u8> = Vec::new();
    loop {
        let at = cur.offset();
        let Some(b) = cur.bump() else {
            return Err(Error::new(ErrorKind::MissQuotationMark, at));
        };

        match b {
            b'"' => break,
            b'\\' => escape(cur, at, &mut buf)?,
            0x00..=0x1f => return Err(Error::new(ErrorKind::InvalidStringChar, at)),
            _ => buf.push(b),
        }
    }

    String::from_utf8(buf).map_err(|_| Error::new(ErrorKind::InvalidStringChar, start))
}

/// `at` is the offset of the backslash.
fn escape(cur: &mut Cursor<'_>, at: usize, buf: &mut Vec<u8>) -> Result<()> {
    let Some(escaped) = cur.bump() else {
        return Err(Error::new(ErrorKind::MissQuotationMark, cur.offset()));
    };

    let b = match escaped {
        b'"' => b'"',     // quotation mark
        b'\\' => b'\\',   // reverse solidus
        b'/' => b'/',     // solidus
        b'b' => b'\x08',  // backspace
        b'f' => b'\x0C',  // form feed
        b'n' => b'\n',    // line feed
        b'r' => b'\r',    // carriage return
        b't' => b'\t',    // tab
        b'u' => {
            let c = unicode_escape(cur, at)?;
            buf.extend_from_slice(c.encode_utf8(&mut [0; 4]).as_bytes());
            return Ok(());
        }
        _ => return Err(Error::new(ErrorKind::InvalidStringEscape, at)),
    };
    buf.push(b);
    Ok(())
}

/// Reads exactly four hex digits as one UTF-16 code unit.
fn hex4(cur: &mut Cursor<'_>) -> Option<u16> {
    let digits = cur.rest().get(..4)?;
    let mut unit: u16 = 0;
    for &d in digits {
        let digit = char::from(d).to_digit(16)?;
        unit = (unit << 4) | digit as u16;
    }
    cur.advance(4);
    Some(unit)
}

/// Decodes the body of a `\u` escape, combining a surrogate pair when the
/// first unit is a high surrogate.
fn unicode_escape(cur: &mut Cursor<'_>, at: usize) -> Result<char> {
    let invalid = || Error::new(ErrorKind::InvalidUnicodeHex, at);

    let high = hex4(cur).ok_or_else(invalid)?;
    let code = match high {
        0xD800..=0xDBFF => {
            if !cur.starts_with(b"\\u") {
                return Err(invalid());
            }
            cur.advance(2);
            let low = hex4(cur).ok_or_else(invalid)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(invalid());
            }
            0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
        }
        // a low surrogate without its high half encodes nothing
        0xDC00..=0xDFFF => return Err(invalid()),
        _ => u32::from(high),
    };

    char::from_u32(code).ok_or_else(invalid)
}
