use wasm_bindgen::prelude::*;

/// Returns the debug dump of the parsed value tree.
#[wasm_bindgen]
pub fn parse(input: &str) -> Result<String, JsError> {
    let parsed = tj::parse(input)?;
    Ok(format!("{:#?}", parsed))
}

/// Parses `input` and re-serializes it as compact JSON.
#[wasm_bindgen]
pub fn stringify(input: &str) -> Result<String, JsError> {
    let parsed = tj::parse(input)?;
    let text = tj::stringify(&parsed)?;
    Ok(text)
}
