//! Computed-value resolution context.
//!
//! [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
//! "The computed value is the result of resolving the specified value..."
//!
//! The context is opaque to composite values: they thread it unchanged
//! through recursive [`compute`](crate::CssValue::compute) calls, and only
//! context-sensitive leaves (lengths) read from it.

use thiserror::Error;

/// User agent default font size.
///
/// [§ 3.5 font-size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
///
/// "Initial: medium" - we define medium as 16px per common browser convention.
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;

/// Context required to resolve relative CSS units to absolute pixel values.
///
/// [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
#[derive(Debug, Clone, Copy)]
pub struct ComputeContext {
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    ///
    /// "em: Equal to the computed value of the font-size property of the element
    /// on which it is used."
    pub font_size_px: f64,

    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    ///
    /// "rem: Equal to the computed value of font-size on the root element."
    pub root_font_size_px: f64,

    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    ///
    /// "The viewport-percentage lengths are relative to the size of the
    /// initial containing block."
    pub viewport_width: f64,

    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    pub viewport_height: f64,
}

impl ComputeContext {
    /// Create a context with default font sizes (16px) and specified viewport.
    #[must_use]
    pub fn with_viewport(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            font_size_px: DEFAULT_FONT_SIZE_PX,
            root_font_size_px: DEFAULT_FONT_SIZE_PX,
            viewport_width,
            viewport_height,
        }
    }

    /// Create a context with all parameters specified.
    #[must_use]
    pub const fn new(
        font_size_px: f64,
        root_font_size_px: f64,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Self {
        Self {
            font_size_px,
            root_font_size_px,
            viewport_width,
            viewport_height,
        }
    }
}

impl Default for ComputeContext {
    fn default() -> Self {
        Self {
            font_size_px: DEFAULT_FONT_SIZE_PX,
            root_font_size_px: DEFAULT_FONT_SIZE_PX,
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }
}

/// Failure to produce a computed value.
///
/// Serialization is total, but computation has preconditions: a grid
/// template can only be computed when all three of its sub-values were
/// parsed. Callers distinguish "not computable" from success through this
/// type rather than a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComputeError {
    /// A grid template was asked to compute itself while one of its
    /// rows/columns/areas sub-values is absent.
    #[error("grid-template `{field}` sub-value is missing; the template cannot be computed")]
    MissingSubvalue {
        /// Which sub-value was absent (`rows`, `columns`, or `areas`).
        field: &'static str,
    },
}
