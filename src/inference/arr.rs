use serde_json::Value;

use super::{obj, resolve_field_type, NumberHints, Resolved, ARRAY_ITEM_KEY};
use crate::ir::TypeRef;
use crate::naming;

/// Type an array found under `key` from its first element.
pub(super) fn resolve_array(key: &str, items: &[Value], hints: &NumberHints) -> Resolved {
    let Some(first) = items.first() else {
        return Resolved { ty: TypeRef::list_of(TypeRef::Dynamic), discovered: Vec::new() };
    };
    if items.len() > 1 {
        tracing::trace!(key, len = items.len(), "typing array from its first element");
    }

    match first {
        Value::Object(map) => {
            let name = naming::to_pascal_case(&naming::singularize(key));
            let (class, nested) = obj::build_class(&name, map, hints);
            let mut discovered = Vec::with_capacity(nested.len() + 1);
            discovered.push(class);
            discovered.extend(nested);
            Resolved { ty: TypeRef::list_of(TypeRef::Class(name)), discovered }
        }
        other => {
            let inner = resolve_field_type(ARRAY_ITEM_KEY, other, hints);
            Resolved { ty: TypeRef::list_of(inner.ty), discovered: inner.discovered }
        }
    }
}
