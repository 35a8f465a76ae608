use chordsheet::{ChordsheetError, DisplayOptions, LineKind, TokenPair};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct BindingError {
    message: String,
    chord: Option<String>,
}

#[derive(Serialize)]
struct TokenizeResult<'a> {
    kind: LineKind,
    pairs: Vec<TokenPair<'a>>,
}

fn error_to_binding_error(e: ChordsheetError) -> BindingError {
    match e {
        ChordsheetError::ChordParse { ref chord } => BindingError {
            chord: Some(chord.clone()),
            message: e.to_string(),
        },
        ChordsheetError::InvalidOptions(_) => BindingError {
            message: e.to_string(),
            chord: None,
        },
    }
}

fn to_js_error(e: ChordsheetError) -> JsValue {
    let error = error_to_binding_error(e);
    let json = serde_json::to_string(&error).unwrap_or_else(|_| error.message.clone());
    JsValue::from_str(&json)
}

fn options_from(options_yaml: Option<String>) -> Result<DisplayOptions, JsValue> {
    match options_yaml {
        Some(yaml) => DisplayOptions::from_yaml(&yaml).map_err(to_js_error),
        None => Ok(DisplayOptions::default()),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Err only when the host page already installed a logger
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Warn);
}

/// Tokenize one line: `{ kind, pairs: [{ current, next }] }`
#[wasm_bindgen]
pub fn tokenize(line: &str) -> Result<JsValue, JsValue> {
    let tokenized = chordsheet::tokenize(line);
    let result = TokenizeResult {
        kind: tokenized.kind(),
        pairs: tokenized.pairs().collect(),
    };
    serde_wasm_bindgen::to_value(&result).map_err(JsValue::from)
}

/// Describe one line as JSON, with display options given as YAML
#[wasm_bindgen]
pub fn describe_line(line: &str, options_yaml: Option<String>) -> Result<String, JsValue> {
    let options = options_from(options_yaml)?;
    to_json(&chordsheet::describe_line(line, &options))
}

/// Describe a section (lines separated by newlines) as JSON
#[wasm_bindgen]
pub fn describe_section(text: &str, options_yaml: Option<String>) -> Result<String, JsValue> {
    let options = options_from(options_yaml)?;
    to_json(&chordsheet::describe_section(text, &options))
}

/// Transpose a single chord symbol from one key to another
#[wasm_bindgen]
pub fn transpose_chord(chord: &str, from_key: &str, to_key: &str) -> Result<String, JsValue> {
    let map = chordsheet::build_transpose_map(from_key, to_key);
    chordsheet::transpose_chord(chord, &map).map_err(to_js_error)
}

/// Key names for a key picker
#[wasm_bindgen]
pub fn key_names() -> Vec<String> {
    chordsheet::KEY_NAMES.iter().map(|k| k.to_string()).collect()
}
