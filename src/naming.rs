//! Identifier conversions used when turning JSON keys into Dart names.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `user_name` | [`to_camel_case`] | `userName` |
//! | `UserName` | [`to_camel_case`] | `userName` |
//! | `user_profile` | [`to_pascal_case`] | `UserProfile` |
//! | `CartModule` | [`to_snake_case`] | `cart_module` |
//! | `categories` | [`singularize`] | `category` |

/// Convert a JSON key into a Dart field name.
///
/// Keys containing `_` have every `_x` (lowercase ASCII `x`) folded into `X`;
/// anything else only gets its first letter lowered.
///
/// ```
/// use json_dart::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("user_name"), "userName");
/// assert_eq!(to_camel_case("UserName"), "userName");
/// assert_eq!(to_camel_case("id"), "id");
/// ```
pub fn to_camel_case(s: &str) -> String {
    if !s.contains('_') {
        let mut chars = s.chars();
        return match chars.next() {
            None => String::new(),
            Some(first) => first.to_lowercase().chain(chars).collect(),
        };
    }

    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('_', Some(next)) if next.is_ascii_lowercase() => {
                result.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => result.push(c),
        }
    }
    result
}

/// Convert a string to PascalCase, splitting on `_` and `-`.
///
/// ```
/// use json_dart::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("user_profile"), "UserProfile");
/// assert_eq!(to_pascal_case("address"), "Address");
/// assert_eq!(to_pascal_case("billingAddress"), "BillingAddress");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split(['-', '_']).map(capitalize).collect()
}

/// Convert a PascalCase class name to snake_case for file names.
///
/// Every uppercase letter after the first character is prefixed with `_`.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Capitalize the first letter of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Naive English singular: `-ies` → `-y`, then strip `-es`, then strip `-s`.
///
/// Words like `names` come out as `nam`; callers live with it.
pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix("es") {
        return stem.to_string();
    }
    if let Some(stem) = word.strip_suffix('s') {
        return stem.to_string();
    }
    word.to_string()
}
