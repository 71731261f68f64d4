//! Keyword constants and the generic typed-constant wrapper
//!
//! [§ 3.1 Pre-defined Keywords](https://www.w3.org/TR/css-values-4/#keywords)

use serde::Serialize;

use super::CssValue;

/// A selected CSS keyword paired with a strongly-typed payload.
///
/// Property definitions map each accepted keyword to a typed datum (an enum
/// variant, a numeric weight, ...). The payload rides along for typed
/// consumers; serialization returns the canonical keyword spelling and never
/// inspects `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Constant<T> {
    key: &'static str,
    data: T,
}

impl<T> Constant<T> {
    /// Pair a canonical keyword spelling with its associated payload.
    #[must_use]
    pub const fn new(key: &'static str, data: T) -> Self {
        Self { key, data }
    }

    /// The canonical keyword spelling.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// The associated payload, untouched.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.data
    }

    /// Canonical CSS text: the keyword, independent of the payload.
    #[must_use]
    pub fn css_text(&self) -> String {
        self.key.to_string()
    }

    /// Erase the payload type to place this constant in a value tree.
    ///
    /// The erased form keeps only the keyword; it is the "unconstrained"
    /// sentinel that short-circuits grid-template serialization.
    #[must_use]
    pub const fn erase(&self) -> CssValue {
        CssValue::Keyword(KeywordValue::new(self.key))
    }
}

/// A keyword-only value node: [`Constant`] with its payload type erased.
///
/// [§ 3.1 Pre-defined Keywords](https://www.w3.org/TR/css-values-4/#keywords)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordValue {
    key: &'static str,
}

impl KeywordValue {
    /// Wrap a canonical keyword spelling.
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    /// The canonical keyword spelling.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Canonical CSS text: the keyword verbatim.
    #[must_use]
    pub fn css_text(&self) -> String {
        self.key.to_string()
    }
}
