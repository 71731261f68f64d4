//! CSS identifier and quoted-string values
//!
//! [§ 4 Textual Data Types](https://www.w3.org/TR/css-values-4/#textual-values)

use serde::Serialize;

/// [§ 4.2 Author-defined Identifiers](https://www.w3.org/TR/css-values-4/#custom-idents)
///
/// "Some properties accept arbitrary author-defined identifiers as a component
/// value." Used for grid area names and grid line names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentValue(String);

impl IdentValue {
    /// Create an identifier value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The identifier as parsed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical CSS text: the identifier itself.
    #[must_use]
    pub fn css_text(&self) -> String {
        self.0.clone()
    }
}

/// [§ 4.3 Quoted Strings](https://www.w3.org/TR/css-values-4/#strings)
///
/// "Strings are denoted by `<string>` and consist of a sequence of characters
/// delimited by double quotes or single quotes."
///
/// Holds the unescaped content; quoting and escaping happen at serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringValue(String);

impl StringValue {
    /// Create a string value from its unescaped content.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    /// The unescaped string content.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical CSS text: double-quoted with `"` and `\` escaped.
    ///
    /// [CSSOM § 6.7.3 serialize a string](https://www.w3.org/TR/cssom-1/#serialize-a-string)
    #[must_use]
    pub fn css_text(&self) -> String {
        let mut out = String::with_capacity(self.0.len() + 2);
        out.push('"');
        for ch in self.0.chars() {
            if ch == '"' || ch == '\\' {
                out.push('\\');
            }
            out.push(ch);
        }
        out.push('"');
        out
    }
}
