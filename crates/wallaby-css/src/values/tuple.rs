//! CSS tuple values
//!
//! An ordered, fixed-length sequence of child value nodes, itself a value
//! node. Tuples carry multi-part property values (track lists, shorthand
//! parts) and serialize as their children's texts joined by single spaces.

use serde::Serialize;

use super::CssValue;
use crate::compute::{ComputeContext, ComputeError};

/// An ordered sequence of child value nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TupleValue {
    items: Vec<CssValue>,
}

impl TupleValue {
    /// Freeze `items` into a tuple value.
    #[must_use]
    pub const fn new(items: Vec<CssValue>) -> Self {
        Self { items }
    }

    /// The child nodes in order.
    #[must_use]
    pub fn items(&self) -> &[CssValue] {
        &self.items
    }

    /// Number of child nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the tuple has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Canonical CSS text: child texts joined by single spaces.
    ///
    /// [CSSOM § 6.7.2](https://www.w3.org/TR/cssom-1/#serializing-css-values)
    /// An empty tuple serializes to the empty string.
    #[must_use]
    pub fn css_text(&self) -> String {
        self.items
            .iter()
            .map(CssValue::css_text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Compute every child against `ctx`, producing a new tuple.
    ///
    /// # Errors
    ///
    /// Propagates the first [`ComputeError`] from a child.
    pub fn compute(&self, ctx: &ComputeContext) -> Result<Self, ComputeError> {
        let items = self
            .items
            .iter()
            .map(|item| item.compute(ctx))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(items))
    }
}

impl From<Vec<CssValue>> for TupleValue {
    fn from(items: Vec<CssValue>) -> Self {
        Self::new(items)
    }
}
