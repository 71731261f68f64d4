//! CSS background composite value
//!
//! [§ 3.10 Backgrounds Shorthand: the background property](https://www.w3.org/TR/css-backgrounds-3/#the-background)

use serde::Serialize;

use super::{CssValue, structurally_equal_opt};
use crate::compute::{ComputeContext, ComputeError};

/// A CSS background definition: the layer list plus the optional final color.
///
/// "The background shorthand sets all background properties in a single
/// declaration; the background color may only appear in the final layer."
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundValue {
    layers: CssValue,
    color: Option<CssValue>,
}

impl BackgroundValue {
    /// Create a background from its layer list and optional color.
    #[must_use]
    pub const fn new(layers: CssValue, color: Option<CssValue>) -> Self {
        Self { layers, color }
    }

    /// The defined layers.
    #[must_use]
    pub const fn layers(&self) -> &CssValue {
        &self.layers
    }

    /// The set color, if any.
    #[must_use]
    pub const fn color(&self) -> Option<&CssValue> {
        self.color.as_ref()
    }

    /// Canonical CSS text: layer text, then the color separated by a space.
    ///
    /// When the layer text is empty the separator is omitted entirely, so a
    /// color-only background never carries a leading space.
    #[must_use]
    pub fn css_text(&self) -> String {
        let layer = self.layers.css_text();

        if let Some(color) = &self.color {
            let sep = if layer.is_empty() { "" } else { " " };
            format!("{layer}{sep}{}", color.css_text())
        } else {
            layer
        }
    }

    /// Compute both children against `ctx`, producing a new background.
    ///
    /// # Errors
    ///
    /// Propagates the first [`ComputeError`] from a child.
    pub fn compute(&self, ctx: &ComputeContext) -> Result<Self, ComputeError> {
        let layers = self.layers.compute(ctx)?;
        let color = self
            .color
            .as_ref()
            .map(|color| color.compute(ctx))
            .transpose()?;
        Ok(Self::new(layers, color))
    }

    /// Field-wise structural equality; an absent color equals only an
    /// absent color.
    #[must_use]
    pub fn structurally_equals(&self, other: &Self) -> bool {
        self.layers.structurally_equals(&other.layers)
            && structurally_equal_opt(self.color.as_ref(), other.color.as_ref())
    }
}
