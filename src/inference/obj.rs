use serde_json::{Map, Value};

use super::{resolve_field_type, NumberHints};
use crate::ir::{ClassDescription, Field};
use crate::naming;

/// Describe one JSON object as a class named `name`.
///
/// Returns the class and, separately, every class nested under it in
/// depth-first pre-order.
pub(super) fn build_class(
    name: &str,
    map: &Map<String, Value>,
    hints: &NumberHints,
) -> (ClassDescription, Vec<ClassDescription>) {
    let mut class = ClassDescription::new(name);
    let mut nested = Vec::new();

    for (key, value) in map {
        let resolved = resolve_field_type(key, value, hints);
        let field_name = naming::to_camel_case(key);
        if class.field(&field_name).is_some() {
            tracing::debug!(class = name, field = %field_name, key = %key, "key collides with an earlier field; replacing it");
        }
        class.insert(Field {
            name: field_name,
            json_key: key.clone(),
            ty: resolved.ty,
        });
        nested.extend(resolved.discovered);
    }

    tracing::debug!(class = name, fields = class.fields.len(), "described class");
    (class, nested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::TypeRef;
    use serde_json::json;

    #[test]
    fn colliding_keys_keep_first_slot_and_last_definition() {
        let v = json!({"user_name": "a", "id": "x", "userName": true});
        let map = v.as_object().unwrap();
        let (class, nested) = build_class("Account", map, &NumberHints::new());
        assert!(nested.is_empty());

        let names: Vec<_> = class.fields.keys().map(String::as_str).collect();
        assert_eq!(names, ["userName", "id"]);
        let f = class.field("userName").unwrap();
        assert_eq!(f.json_key, "userName");
        assert_eq!(f.ty, TypeRef::Bool);
    }

    #[test]
    fn field_order_follows_source_order() {
        let v = json!({"zeta": 1, "alpha": 2, "mid": 3});
        let (class, _) = build_class("Root", v.as_object().unwrap(), &NumberHints::new());
        let names: Vec<_> = class.fields.keys().map(String::as_str).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }
}
