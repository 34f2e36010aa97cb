use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// `"key": <number>` where the number is an optionally negative digit run
/// with an optional fractional part. Exponents are not part of the match, so
/// `1e10` is read as `1`.
static KEYED_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""([^"]+)"\s*:\s*(-?\d+\.?\d*)"#).expect("keyed number pattern is valid")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumKind {
    Int,
    Double,
}

/// Integer/floating-point classification per raw JSON key.
///
/// Parsed JSON numbers forget whether they were written `5` or `5.0`, so the
/// classification comes from the source text. Keys are not qualified by path:
/// the last occurrence of a key in text order decides for every object that
/// uses it.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NumberHints {
    kinds: HashMap<String, NumKind>,
}

impl NumberHints {
    pub fn new() -> Self { Self::default() }

    /// Scan raw JSON text for keyed numeric literals.
    pub fn sniff(raw: &str) -> Self {
        let mut hints = Self::new();
        for caps in KEYED_NUMBER.captures_iter(raw) {
            let kind = if caps[2].contains('.') { NumKind::Double } else { NumKind::Int };
            tracing::trace!(key = &caps[1], literal = &caps[2], ?kind, "numeric hint");
            hints.insert(&caps[1], kind);
        }
        hints
    }

    pub fn insert(&mut self, key: impl Into<String>, kind: NumKind) {
        self.kinds.insert(key.into(), kind);
    }

    pub fn get(&self, key: &str) -> Option<NumKind> {
        self.kinds.get(key).copied()
    }

    pub fn len(&self) -> usize { self.kinds.len() }

    pub fn is_empty(&self) -> bool { self.kinds.is_empty() }
}

impl<K: Into<String>> FromIterator<(K, NumKind)> for NumberHints {
    fn from_iter<I: IntoIterator<Item = (K, NumKind)>>(iter: I) -> Self {
        let mut hints = Self::new();
        for (key, kind) in iter {
            hints.insert(key, kind);
        }
        hints
    }
}
