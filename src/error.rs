use std::fmt;

pub type Result<T> = std::result::Result<T, self::Error>;

/// The reason a parse failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
    #[error("expected a value")]
    ExpectValue,
    #[error("invalid value")]
    InvalidValue,
    #[error("unexpected characters after the root value")]
    RootNotSingular,
    #[error("missing closing quotation mark")]
    MissQuotationMark,
    #[error("invalid escape sequence in string")]
    InvalidStringEscape,
    #[error("invalid character in string")]
    InvalidStringChar,
    #[error("number out of range")]
    NumberOutOfRange,
    #[error("invalid unicode escape")]
    InvalidUnicodeHex,
    #[error("expected ',' or ']'")]
    MissCommaOrSquareBracket,
    #[error("expected a string key")]
    MissKey,
    #[error("missing object braces")]
    MissBraces,
    #[error("expected ':'")]
    MissColon,
    #[error("expected ',' or '}}'")]
    MissCommaOrCurlyBracket,
    #[error("nesting too deep")]
    NestingTooDeep,
    #[error("duplicate object key")]
    DuplicateKey,
}

/// A parse failure together with the byte offset where it was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at byte {offset}")]
pub struct Error {
    kind: ErrorKind,
    offset: usize,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Byte offset into the input at which parsing stopped.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl PartialEq<ErrorKind> for Error {
    fn eq(&self, other: &ErrorKind) -> bool {
        self.kind == *other
    }
}

/// Errors produced while rendering a [`Value`](crate::Value) to text.
#[derive(Debug, thiserror::Error)]
pub enum StringifyError {
    /// JSON has no representation for NaN or the infinities.
    #[error("cannot stringify non-finite number {0}")]
    NonFiniteNumber(f64),
    #[error(transparent)]
    Fmt(#[from] fmt::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offset() {
        let err = Error::new(ErrorKind::MissColon, 7);
        assert_eq!(err.to_string(), "expected ':' at byte 7");
    }

    #[test]
    fn curly_bracket_message_is_unescaped() {
        assert_eq!(
            ErrorKind::MissCommaOrCurlyBracket.to_string(),
            "expected ',' or '}'"
        );
    }

    #[test]
    fn compares_against_kind() {
        let err = Error::new(ErrorKind::InvalidValue, 0);
        assert_eq!(err, ErrorKind::InvalidValue);
        assert_ne!(err, ErrorKind::ExpectValue);
    }

    #[test]
    fn stringify_error_message() {
        let err = StringifyError::NonFiniteNumber(f64::INFINITY);
        assert_eq!(err.to_string(), "cannot stringify non-finite number inf");
    }
}
