//! CSS value-node tree, serialization, and computed-value resolution for the Wallaby renderer.
//!
//! # Scope
//!
//! This crate implements:
//! - **Value nodes** ([CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/))
//!   - Leaf values: identifiers, quoted strings, lengths, flexible (`fr`) track sizes,
//!     and keyword constants
//!   - The generic [`Constant`] wrapper pairing a keyword with a typed payload
//!   - Composite values: tuples, backgrounds, and grid templates
//!
//! - **Serialization** ([CSSOM § 6.7.2 Serializing CSS Values](https://www.w3.org/TR/cssom-1/#serializing-css-values))
//!   - Every node produces its canonical CSS text deterministically
//!   - Grid templates splice area labels into row tuples and join columns with ` / `
//!   - A keyword sub-value short-circuits the whole grid template to `none`
//!
//! - **Computed values** ([§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed))
//!   - [`CssValue::compute`] resolves a tree against a [`ComputeContext`],
//!     producing a new tree and leaving the original untouched
//!   - Relative lengths (em, rem, vw, vh) resolve to absolute pixels
//!
//! # Not Yet Implemented
//!
//! - Tokenization and parsing (value trees are built by the parser crate)
//! - Cascade, inheritance, and selector matching
//! - calc() and other functional notations
//! - Color values and the full property catalogue

/// Computed-value resolution per [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed).
pub mod compute;
/// Canonical keyword spellings per [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/#keywords).
pub mod keywords;
/// CSS value-node types per [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/).
pub mod values;

// Re-exports for convenience
pub use compute::{ComputeContext, ComputeError, DEFAULT_FONT_SIZE_PX};
pub use values::{
    BackgroundValue, Constant, CssValue, FlexValue, GridTemplateValue, IdentValue, KeywordValue,
    LengthValue, StringValue, TupleValue,
};
