// Typed class model handed from inference to codegen. No serde_json::Value here.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum TypeRef {
    String,
    Int,
    Double,
    Bool,
    Dynamic,                 // null or empty-array element
    Class(String),           // reference to a generated class
    List(Box<TypeRef>),
}

impl TypeRef {
    pub fn list_of(item: TypeRef) -> Self {
        TypeRef::List(Box::new(item))
    }

    /// Class name of `List<Class>` elements, if that is what this is.
    pub fn list_class(&self) -> Option<&str> {
        match self {
            TypeRef::List(item) => match item.as_ref() {
                TypeRef::Class(name) => Some(name),
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::String => f.write_str("String"),
            TypeRef::Int => f.write_str("int"),
            TypeRef::Double => f.write_str("double"),
            TypeRef::Bool => f.write_str("bool"),
            TypeRef::Dynamic => f.write_str("dynamic"),
            TypeRef::Class(name) => f.write_str(name),
            TypeRef::List(item) => write!(f, "List<{item}>"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub json_key: String,    // literal key read/written by the generated code
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDescription {
    pub name: String,
    pub fields: IndexMap<String, Field>, // first-seen key order
}

impl ClassDescription {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), fields: IndexMap::new() }
    }

    /// Insert or replace a field by name. A replaced field keeps its slot.
    pub fn insert(&mut self, field: Field) {
        self.fields.insert(field.name.clone(), field);
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }
}

/// Everything one generation discovered: the root plus nested classes in
/// depth-first pre-order.
#[derive(Debug, Clone, Serialize)]
pub struct Generated {
    pub root: ClassDescription,
    pub nested: Vec<ClassDescription>,
}

impl Generated {
    pub fn classes(&self) -> impl Iterator<Item = &ClassDescription> {
        std::iter::once(&self.root).chain(self.nested.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_ref_renders_dart_spelling() {
        assert_eq!(TypeRef::Int.to_string(), "int");
        assert_eq!(TypeRef::list_of(TypeRef::String).to_string(), "List<String>");
        assert_eq!(
            TypeRef::list_of(TypeRef::list_of(TypeRef::Double)).to_string(),
            "List<List<double>>"
        );
        assert_eq!(TypeRef::Class("Item".into()).to_string(), "Item");
    }

    #[test]
    fn list_class_only_for_lists_of_classes() {
        assert_eq!(TypeRef::list_of(TypeRef::Class("Item".into())).list_class(), Some("Item"));
        assert_eq!(TypeRef::list_of(TypeRef::Int).list_class(), None);
        assert_eq!(TypeRef::Class("Item".into()).list_class(), None);
    }

    #[test]
    fn replaced_field_keeps_first_position() {
        let mut class = ClassDescription::new("User");
        class.insert(Field { name: "userName".into(), json_key: "user_name".into(), ty: TypeRef::String });
        class.insert(Field { name: "id".into(), json_key: "id".into(), ty: TypeRef::Int });
        class.insert(Field { name: "userName".into(), json_key: "userName".into(), ty: TypeRef::Bool });

        let names: Vec<_> = class.fields.keys().cloned().collect();
        assert_eq!(names, ["userName", "id"]);
        let user_name = class.field("userName").unwrap();
        assert_eq!(user_name.json_key, "userName");
        assert_eq!(user_name.ty, TypeRef::Bool);
    }
}
