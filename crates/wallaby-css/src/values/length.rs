//! CSS length and flexible track-sizing values
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! [CSS Grid Layout Level 2](https://www.w3.org/TR/css-grid-2/)

use serde::Serialize;

use crate::compute::ComputeContext;

/// [§ 5 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
/// "Lengths refer to distance measurements and are denoted by `<length>` in the
/// property definitions."
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LengthValue {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    Px(f64),
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// "Equal to the computed value of the font-size property of the element"
    Em(f64),
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// "Equal to the computed value of font-size on the root element."
    Rem(f64),
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    /// "1vw = 1% of viewport width"
    Vw(f64),
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    /// "1vh = 1% of viewport height"
    Vh(f64),
}

impl LengthValue {
    /// Resolve this length to an absolute pixel value using the provided context.
    ///
    /// [§ 4.4 Used Values](https://www.w3.org/TR/css-cascade-4/#used-value)
    #[must_use]
    pub fn to_px(&self, ctx: &ComputeContext) -> f64 {
        match self {
            Self::Px(px) => *px,
            // "em: Equal to the computed value of the font-size property of
            // the element on which it is used."
            Self::Em(em) => *em * ctx.font_size_px,
            // "rem: Equal to the computed value of font-size on the root element."
            Self::Rem(rem) => *rem * ctx.root_font_size_px,
            // "1vw = 1% of viewport width"
            Self::Vw(vw) => *vw * ctx.viewport_width / 100.0,
            // "1vh = 1% of viewport height"
            Self::Vh(vh) => *vh * ctx.viewport_height / 100.0,
        }
    }

    /// Computed form of this length: the equivalent absolute pixel length.
    ///
    /// [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
    /// Relative units do not survive computation, so computing twice with
    /// any context is idempotent on the result.
    #[must_use]
    pub fn compute(&self, ctx: &ComputeContext) -> Self {
        Self::Px(self.to_px(ctx))
    }

    /// Canonical CSS text, e.g. `16px` or `1.5em`.
    ///
    /// [CSSOM § 6.7.2](https://www.w3.org/TR/cssom-1/#serializing-css-values)
    #[must_use]
    pub fn css_text(&self) -> String {
        match self {
            Self::Px(v) => format!("{v}px"),
            Self::Em(v) => format!("{v}em"),
            Self::Rem(v) => format!("{v}rem"),
            Self::Vw(v) => format!("{v}vw"),
            Self::Vh(v) => format!("{v}vh"),
        }
    }
}

/// [CSS Grid § 7.2.4 Flexible Lengths: the fr unit](https://www.w3.org/TR/css-grid-2/#fr-unit)
///
/// "A flexible length or `<flex>` is a dimension with the fr unit, which
/// represents a fraction of the leftover space in the grid container."
///
/// Fractions only resolve during track sizing, so the computed form is the
/// value itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlexValue(pub f64);

impl FlexValue {
    /// Canonical CSS text, e.g. `1fr`.
    #[must_use]
    pub fn css_text(self) -> String {
        format!("{}fr", self.0)
    }
}
