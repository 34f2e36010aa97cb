//! Class tree inference from a single JSON sample.
//!
//! Walk a parsed JSON value and describe every object shape in it as a
//! [`ClassDescription`]. Each recursive step returns the classes it
//! discovered and the caller merges them, so no list is shared across the
//! walk and the output order is a plain depth-first pre-order.
//!
//! Fallbacks, never errors:
//! - a number with no hint for its key becomes `double`;
//! - arrays are typed from their first element only, later elements are not read;
//! - the same shape at two paths is described twice, once per path.
pub mod num;
mod arr;
mod obj;

use serde_json::Value;

use crate::ir::{ClassDescription, Generated, TypeRef};
use crate::naming;

pub use num::{NumKind, NumberHints};

/// Hint key used for primitive array elements, which have no key of their own.
pub const ARRAY_ITEM_KEY: &str = "item";

// ------------------------------- Resolve ---------------------------------- //

/// A field type plus the classes that had to be described to express it.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub ty: TypeRef,
    pub discovered: Vec<ClassDescription>,
}

impl Resolved {
    fn leaf(ty: TypeRef) -> Self {
        Self { ty, discovered: Vec::new() }
    }
}

/// Map one JSON value, found under `key`, to its Dart type.
pub fn resolve_field_type(key: &str, value: &Value, hints: &NumberHints) -> Resolved {
    match value {
        Value::Null => Resolved::leaf(TypeRef::Dynamic),
        Value::Bool(_) => Resolved::leaf(TypeRef::Bool),
        Value::String(_) => Resolved::leaf(TypeRef::String),
        Value::Number(_) => Resolved::leaf(number_type(key, hints)),
        Value::Array(items) => arr::resolve_array(key, items, hints),
        Value::Object(map) => {
            let name = naming::to_pascal_case(key);
            let (class, nested) = obj::build_class(&name, map, hints);
            let mut discovered = Vec::with_capacity(nested.len() + 1);
            discovered.push(class);
            discovered.extend(nested);
            Resolved { ty: TypeRef::Class(name), discovered }
        }
    }
}

fn number_type(key: &str, hints: &NumberHints) -> TypeRef {
    match hints.get(key) {
        Some(NumKind::Int) => TypeRef::Int,
        Some(NumKind::Double) => TypeRef::Double,
        None => {
            tracing::debug!(key, "no numeric hint, assuming double");
            TypeRef::Double
        }
    }
}

// ------------------------------- Front API -------------------------------- //

/// Describe the root class named `root_name` and every class nested in it.
///
/// `sample` should be an object; anything else yields a root with no fields.
pub fn build_classes(root_name: &str, sample: &Value, hints: &NumberHints) -> Generated {
    let (root, nested) = match sample {
        Value::Object(map) => obj::build_class(root_name, map, hints),
        other => {
            tracing::warn!(
                root = root_name,
                kind = value_kind(other),
                "sample is not a JSON object; generating an empty class"
            );
            (ClassDescription::new(root_name), Vec::new())
        }
    };
    tracing::debug!(root = root_name, nested = nested.len(), "class tree built");
    Generated { root, nested }
}

pub fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ------------------------------- Tests ------------------------------------ //
