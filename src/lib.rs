//! Generate Dart model classes from a sample JSON document.
//!
//! ```text
//! raw JSON text ──► NumberHints::sniff ──┐
//!       │                                ▼
//!       └──► serde_json::Value ──► inference::build_classes ──► codegen::render ──► Dart source
//! ```
//!
//! ```
//! let dart = json_dart::generate_from_str("User", r#"{"user_name": "ada", "age": 36}"#).unwrap();
//! assert!(dart.contains("class User {"));
//! assert!(dart.contains("  int? age;"));
//! assert!(dart.contains("data['user_name'] = userName;"));
//! ```
pub mod cli;
pub mod codegen;
pub mod error;
pub mod inference;
pub mod ir;
pub mod naming;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

pub use error::{Error, Result};
pub use inference::{NumKind, NumberHints};
pub use ir::{ClassDescription, Field, Generated, TypeRef};

/// Extension of every generated file.
pub const DART_EXTENSION: &str = "dart";

static CLASS_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").expect("class name pattern is valid"));

pub fn validate_class_name(name: &str) -> Result<()> {
    if CLASS_NAME.is_match(name) {
        Ok(())
    } else {
        Err(Error::InvalidClassName(name.to_string()))
    }
}

/// `CartModule` → `cart_module.dart`
pub fn file_name_for(class_name: &str) -> String {
    format!("{}.{DART_EXTENSION}", naming::to_snake_case(class_name))
}

/// Parse raw JSON text and sniff its numeric hints from the same text.
pub fn parse_sample(raw: &str) -> Result<(Value, NumberHints)> {
    if raw.trim().is_empty() {
        return Err(Error::EmptyJson);
    }
    let value = serde_json::from_str::<Value>(raw)?;
    let hints = NumberHints::sniff(raw);
    tracing::debug!(hints = hints.len(), "parsed sample");
    Ok((value, hints))
}

/// Narrow a parsed document with an RFC 6901 JSON pointer.
pub fn select(value: Value, pointer: Option<&str>) -> Result<Value> {
    match pointer {
        None | Some("") => Ok(value),
        Some(ptr) => value
            .pointer(ptr)
            .cloned()
            .ok_or_else(|| Error::PointerNotFound(ptr.to_string())),
    }
}

/// Build the class tree for a sample.
///
/// A top-level array stands for its first element; an empty one is rejected.
pub fn infer(root_name: &str, sample: &Value, hints: &NumberHints) -> Result<Generated> {
    let sample = match sample {
        Value::Array(items) => items.first().ok_or(Error::EmptyArray)?,
        other => other,
    };
    Ok(inference::build_classes(root_name, sample, hints))
}

/// Generate Dart source for `root_name` and every class nested in `sample`.
pub fn generate(root_name: &str, sample: &Value, hints: &NumberHints) -> Result<String> {
    let generated = infer(root_name, sample, hints)?;
    Ok(codegen::render(&generated))
}

/// Validate, parse, sniff and generate in one call.
pub fn generate_from_str(root_name: &str, raw: &str) -> Result<String> {
    validate_class_name(root_name)?;
    let (value, hints) = parse_sample(raw)?;
    generate(root_name, &value, &hints)
}
