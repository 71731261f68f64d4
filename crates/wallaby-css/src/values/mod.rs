//! CSS value-node types
//!
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSSOM § 6.7.2 Serializing CSS Values](https://www.w3.org/TR/cssom-1/#serializing-css-values)
//! - [CSS Grid Layout Level 2](https://www.w3.org/TR/css-grid-2/)
//!
//! A parsed property value is an immutable tree of [`CssValue`] nodes. Every
//! node serializes to canonical CSS text with [`CssValue::css_text`] and can
//! resolve itself against a [`ComputeContext`] with [`CssValue::compute`],
//! which allocates a fresh tree and never mutates the original. Trees are
//! therefore safe to share and compute from multiple threads concurrently.

mod background;
mod constant;
mod grid_template;
mod ident;
mod length;
mod tuple;

pub use background::BackgroundValue;
pub use constant::{Constant, KeywordValue};
pub use grid_template::GridTemplateValue;
pub use ident::{IdentValue, StringValue};
pub use length::{FlexValue, LengthValue};
pub use tuple::TupleValue;

use serde::Serialize;

use crate::compute::{ComputeContext, ComputeError};

/// A single node in a parsed CSS property value tree.
///
/// The set of variants is closed: consumers match exhaustively, so adding a
/// variant is a compile-time-checked change, not a runtime type probe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CssValue {
    /// [§ 4.2 Author-defined Identifiers](https://www.w3.org/TR/css-values-4/#custom-idents)
    ///
    /// A custom-ident leaf, e.g. a grid area name or line name.
    Ident(IdentValue),

    /// [§ 4.3 Quoted Strings](https://www.w3.org/TR/css-values-4/#strings)
    ///
    /// A quoted-string leaf, e.g. a `grid-template-areas` row string.
    Str(StringValue),

    /// [§ 5 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
    ///
    /// A dimensional leaf. The one variant whose computed form depends on
    /// the context (font sizes, viewport).
    Length(LengthValue),

    /// [CSS Grid § 7.2.4 Flexible Lengths](https://www.w3.org/TR/css-grid-2/#fr-unit)
    ///
    /// An `fr` flexible track-sizing leaf.
    Flex(FlexValue),

    /// [§ 3.1 Pre-defined Keywords](https://www.w3.org/TR/css-values-4/#keywords)
    ///
    /// A keyword-only leaf: the type-erased form of [`Constant`]. A grid
    /// template containing one of these in any sub-value serializes as the
    /// keyword `none` ("unconstrained").
    Keyword(KeywordValue),

    /// An ordered, fixed-length sequence of child nodes, space-joined.
    Tuple(TupleValue),

    /// [CSS Backgrounds § 3.10 background](https://www.w3.org/TR/css-backgrounds-3/#the-background)
    ///
    /// Background layers plus an optional final color.
    Background(Box<BackgroundValue>),

    /// [CSS Grid § 7.4 grid-template](https://www.w3.org/TR/css-grid-2/#explicit-grid-shorthand)
    ///
    /// Rows, columns, and areas fused into the shorthand serialization.
    GridTemplate(Box<GridTemplateValue>),
}

impl CssValue {
    /// Serialize this node to its canonical CSS text.
    ///
    /// [CSSOM § 6.7.2](https://www.w3.org/TR/cssom-1/#serializing-css-values)
    ///
    /// Total and pure: every node has a text form regardless of context.
    #[must_use]
    pub fn css_text(&self) -> String {
        match self {
            Self::Ident(ident) => ident.css_text(),
            Self::Str(string) => string.css_text(),
            Self::Length(length) => length.css_text(),
            Self::Flex(flex) => flex.css_text(),
            Self::Keyword(keyword) => keyword.css_text(),
            Self::Tuple(tuple) => tuple.css_text(),
            Self::Background(background) => background.css_text(),
            Self::GridTemplate(template) => template.css_text(),
        }
    }

    /// Resolve this node against `ctx`, producing a new tree.
    ///
    /// [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
    ///
    /// The receiver is never mutated; composites recompute every child and
    /// the result aliases nothing from the original.
    ///
    /// # Errors
    ///
    /// Returns [`ComputeError::MissingSubvalue`] when a grid template in the
    /// tree has an absent rows/columns/areas sub-value.
    pub fn compute(&self, ctx: &ComputeContext) -> Result<Self, ComputeError> {
        match self {
            // Keywords, idents, strings, and fr tracks are context-independent.
            Self::Ident(_) | Self::Str(_) | Self::Flex(_) | Self::Keyword(_) => Ok(self.clone()),
            Self::Length(length) => Ok(Self::Length(length.compute(ctx))),
            Self::Tuple(tuple) => Ok(Self::Tuple(tuple.compute(ctx)?)),
            Self::Background(background) => {
                Ok(Self::Background(Box::new(background.compute(ctx)?)))
            }
            Self::GridTemplate(template) => {
                Ok(Self::GridTemplate(Box::new(template.compute(ctx)?)))
            }
        }
    }

    /// Structural equality over the whole tree.
    ///
    /// Used by cascade diffing. Nodes of different variants are never equal;
    /// composites compare field-wise, with absent fields equal only to
    /// absent fields.
    #[must_use]
    pub fn structurally_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Background(a), Self::Background(b)) => a.structurally_equals(b),
            (Self::GridTemplate(a), Self::GridTemplate(b)) => a.structurally_equals(b),
            _ => self == other,
        }
    }

    /// View this node as a tuple, if it is one.
    #[must_use]
    pub const fn as_tuple(&self) -> Option<&TupleValue> {
        match self {
            Self::Tuple(tuple) => Some(tuple),
            _ => None,
        }
    }
}

/// Compare two optional sub-values structurally.
///
/// Absent equals absent; absent never equals present. Neither side is ever
/// dereferenced unguarded.
pub(crate) fn structurally_equal_opt(a: Option<&CssValue>, b: Option<&CssValue>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.structurally_equals(b),
        (None, None) => true,
        _ => false,
    }
}
