// Defined in RFC8259 also known as STD90.

//! Decodes JSON text into a [`Value`] tree and encodes it back.
//!
//! ```
//! let v = tj::parse(r#"{"a":[1,2,3]}"#).unwrap();
//! assert_eq!(v["a"][1], tj::Value::Number(2.0));
//! assert_eq!(tj::stringify(&v).unwrap(), r#"{"a":[1,2,3]}"#);
//! ```

pub use config::ParseConfig;
pub use error::{Error, ErrorKind, Result, StringifyError};
pub use value::{Map, Type, Value};

mod config;
mod cursor;
pub mod error;
mod generate;
mod parse;
mod value;

pub fn parse(input: impl AsRef<[u8]>) -> Result<Value> {
    parse::parse(input.as_ref(), &ParseConfig::default())
}

pub fn parse_with(input: impl AsRef<[u8]>, config: &ParseConfig) -> Result<Value> {
    parse::parse(input.as_ref(), config)
}

/// Parses into a caller-owned value. `out` is `Null` on entry and stays `Null`
/// if parsing fails, so a partially built tree is never observable.
pub fn parse_into(input: impl AsRef<[u8]>, out: &mut Value) -> Result<()> {
    parse_into_with(input, out, &ParseConfig::default())
}

/// [`parse_into`] under an explicit [`ParseConfig`].
pub fn parse_into_with(
    input: impl AsRef<[u8]>,
    out: &mut Value,
    config: &ParseConfig,
) -> Result<()> {
    out.set_null();
    *out = parse::parse(input.as_ref(), config)?;
    Ok(())
}

pub fn stringify(value: &Value) -> std::result::Result<String, StringifyError> {
    generate::stringify(value)
}
