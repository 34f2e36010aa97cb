//! Dart class generation from class descriptions.
//!
//! Each class becomes nullable fields, a named-parameter constructor, a
//! `fromJson` constructor and a `toJson` method. Every read and write goes
//! through the field's original JSON key, so `userName` still round-trips
//! as `user_name`.

use crate::ir::{ClassDescription, Field, Generated, TypeRef};

/// Render the root class followed by every nested class, separated by a blank line.
pub fn render(generated: &Generated) -> String {
    generated
        .classes()
        .map(render_class)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render one Dart class.
pub fn render_class(class: &ClassDescription) -> String {
    let mut code = String::new();

    code.push_str(&format!("class {} {{\n", class.name));

    // Fields
    for field in class.fields.values() {
        code.push_str(&format!("  {}? {};\n", field.ty, field.name));
    }
    code.push('\n');

    // Constructor
    let params = class
        .fields
        .values()
        .map(|f| format!("this.{}", f.name))
        .collect::<Vec<_>>()
        .join(", ");
    code.push_str(&format!("  {}({{{}}});\n\n", class.name, params));

    code.push_str(&render_from_json(class));
    code.push_str(&render_to_json(class));

    code.push('}');
    code
}

fn render_from_json(class: &ClassDescription) -> String {
    let mut code = format!("  {}.fromJson(Map<String, dynamic> json) {{\n", class.name);

    for field in class.fields.values() {
        let name = &field.name;
        let key = dart_string_literal(&field.json_key);

        match &field.ty {
            TypeRef::List(item) => match item.as_ref() {
                TypeRef::Class(item_class) => {
                    code.push_str(&format!("    if (json[{key}] != null) {{\n"));
                    code.push_str(&format!("      {name} = <{item_class}>[];\n"));
                    code.push_str(&format!("      json[{key}].forEach((v) {{\n"));
                    code.push_str(&format!("        {name}!.add({item_class}.fromJson(v));\n"));
                    code.push_str("      });\n");
                    code.push_str("    }\n");
                }
                _ => {
                    code.push_str(&format!(
                        "    {name} = json[{key}] != null ? List<{item}>.from(json[{key}]) : null;\n"
                    ));
                }
            },
            TypeRef::Class(class_name) => {
                code.push_str(&format!(
                    "    {name} = json[{key}] != null ? {class_name}.fromJson(json[{key}]) : null;\n"
                ));
            }
            TypeRef::Int => {
                code.push_str(&format!("    {name} = (json[{key}] as num?)?.toInt();\n"));
            }
            TypeRef::Double => {
                code.push_str(&format!("    {name} = (json[{key}] as num?)?.toDouble();\n"));
            }
            TypeRef::String | TypeRef::Bool | TypeRef::Dynamic => {
                code.push_str(&format!("    {name} = json[{key}];\n"));
            }
        }
    }

    code.push_str("  }\n\n");
    code
}

fn render_to_json(class: &ClassDescription) -> String {
    let mut code = String::from("  Map<String, dynamic> toJson() {\n");
    code.push_str("    final Map<String, dynamic> data = <String, dynamic>{};\n");

    for field in class.fields.values() {
        code.push_str(&to_json_entry(field));
    }

    code.push_str("    return data;\n");
    code.push_str("  }\n");
    code
}

fn to_json_entry(field: &Field) -> String {
    let name = &field.name;
    let key = dart_string_literal(&field.json_key);

    if field.ty.list_class().is_some() {
        format!(
            "    if ({name} != null) {{\n      data[{key}] = {name}!.map((v) => v.toJson()).toList();\n    }}\n"
        )
    } else if let TypeRef::Class(_) = field.ty {
        format!("    if ({name} != null) {{\n      data[{key}] = {name}!.toJson();\n    }}\n")
    } else {
        format!("    data[{key}] = {name};\n")
    }
}

/// Quote a JSON key as a single-quoted Dart string literal.
pub fn dart_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
