use tracing::{debug, trace};

use crate::config::ParseConfig;
use crate::cursor::Cursor;
use crate::error::{Error, ErrorKind, Result};
use crate::value::{Map, Value};

mod number;
mod string;

pub(crate) fn parse(input: &[u8], config: &ParseConfig) -> Result<Value> {
    let mut parser = Parser::new(input, *config);
    let result = parser.document();
    if let Err(err) = &result {
        debug!(kind = ?err.kind(), offset = err.offset(), "parse failed");
    }
    result
}

struct Parser<'a> {
    cur: Cursor<'a>,
    config: ParseConfig,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a [u8], config: ParseConfig) -> Self {
        Self {
            cur: Cursor::new(input),
            config,
            depth: 0,
        }
    }

    fn error(&self, kind: ErrorKind) -> Error {
        Error::new(kind, self.cur.offset())
    }

    /// JSON-text = ws value ws
    fn document(&mut self) -> Result<Value> {
        self.cur.eat_whitespace();
        if self.cur.is_eof() {
            return Err(self.error(ErrorKind::ExpectValue));
        }

        let v = self.value()?;

        self.cur.eat_whitespace();
        if !self.cur.is_eof() {
            return Err(self.error(ErrorKind::RootNotSingular));
        }
        Ok(v)
    }

    /// Dispatches on the first byte. Leading whitespace must already be eaten.
    fn value(&mut self) -> Result<Value> {
        match self.cur.peek() {
            None => Err(self.error(ErrorKind::ExpectValue)),
            Some(b'n') => self.literal(b"null", Value::Null),
            Some(b'f') => self.literal(b"false", Value::Boolean(false)),
            Some(b't') => self.literal(b"true", Value::Boolean(true)),
            Some(b'"') => string::string(&mut self.cur).map(Value::String),
            Some(b'[') => self.array(),
            Some(b'{') => self.object(),
            Some(_) => number::number(&mut self.cur).map(Value::Number),
        }
    }

    fn literal(&mut self, keyword: &[u8], value: Value) -> Result<Value> {
        if !self.cur.starts_with(keyword) {
            return Err(self.error(ErrorKind::InvalidValue));
        }
        self.cur.advance(keyword.len());
        Ok(value)
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.config.max_depth {
            return Err(self.error(ErrorKind::NestingTooDeep));
        }
        trace!(depth = self.depth, offset = self.cur.offset(), "enter container");
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn array(&mut self) -> Result<Value> {
        self.enter()?;
        self.cur.bump();
        self.cur.eat_whitespace();

        match self.cur.peek() {
            Some(b']') => {
                self.cur.bump();
                self.leave();
                return Ok(Value::Array(Vec::new()));
            }
            None => return Err(self.error(ErrorKind::MissCommaOrSquareBracket)),
            Some(_) => {}
        }

        let mut values: Vec<Value> = Vec::new();
        loop {
            values.push(self.value()?);

            self.cur.eat_whitespace();
            match self.cur.peek() {
                Some(b',') => {
                    self.cur.bump();
                    self.cur.eat_whitespace();
                }
                Some(b']') => {
                    self.cur.bump();
                    break;
                }
                _ => return Err(self.error(ErrorKind::MissCommaOrSquareBracket)),
            }
        }

        self.leave();
        Ok(Value::Array(values))
    }

    fn object(&mut self) -> Result<Value> {
        self.enter()?;
        self.cur.bump();
        self.cur.eat_whitespace();

        match self.cur.peek() {
            Some(b'}') => {
                self.cur.bump();
                self.leave();
                return Ok(Value::Object(Map::new()));
            }
            None => return Err(self.error(ErrorKind::MissBraces)),
            Some(_) => {}
        }

        let mut obj = Map::new();
        loop {
            let key_offset = self.cur.offset();
            let key = self.key()?;
            if self.config.reject_duplicate_keys && obj.contains_key(&key) {
                return Err(Error::new(ErrorKind::DuplicateKey, key_offset));
            }

            self.cur.eat_whitespace();
            if self.cur.peek() != Some(b':') {
                return Err(self.error(ErrorKind::MissColon));
            }
            self.cur.bump();
            self.cur.eat_whitespace();

            let v = self.value()?;
            // last occurrence wins; the key keeps its first position
            obj.insert(key, v);

            self.cur.eat_whitespace();
            match self.cur.peek() {
                Some(b',') => {
                    self.cur.bump();
                    self.cur.eat_whitespace();
                }
                Some(b'}') => {
                    self.cur.bump();
                    break;
                }
                _ => return Err(self.error(ErrorKind::MissCommaOrCurlyBracket)),
            }
        }

        self.leave();
        Ok(Value::Object(obj))
    }

    fn key(&mut self) -> Result<String> {
        if self.cur.peek() != Some(b'"') {
            return Err(self.error(ErrorKind::MissKey));
        }
        string::string(&mut self.cur)
    }
}
