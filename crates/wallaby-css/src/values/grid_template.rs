//! CSS grid-template composite value
//!
//! [§ 7.4 Explicit Grid Shorthand: the grid-template property](https://www.w3.org/TR/css-grid-2/#explicit-grid-shorthand)
//!
//! "Sets grid-template-rows, grid-template-columns, and grid-template-areas
//! in a single declaration." Serialization fuses the three sub-values: each
//! area label is spliced into its row tuple, and the column track list is
//! appended after a ` / ` separator.

use serde::Serialize;

use wallaby_common::warning::warn_once;

use super::{CssValue, TupleValue, structurally_equal_opt};
use crate::compute::{ComputeContext, ComputeError};
use crate::keywords;

/// A CSS grid template definition: rows, columns, and areas.
///
/// Sub-values are absent when the parser saw no corresponding longhand.
/// When present and not keyword-only, rows and areas are tuples whose
/// elements align positionally: row *i* carries area *i*.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridTemplateValue {
    rows: Option<CssValue>,
    columns: Option<CssValue>,
    areas: Option<CssValue>,
}

impl GridTemplateValue {
    /// Create a grid template from its sub-values.
    #[must_use]
    pub const fn new(
        rows: Option<CssValue>,
        columns: Option<CssValue>,
        areas: Option<CssValue>,
    ) -> Self {
        Self {
            rows,
            columns,
            areas,
        }
    }

    /// The value for the template rows.
    #[must_use]
    pub const fn rows(&self) -> Option<&CssValue> {
        self.rows.as_ref()
    }

    /// The value for the template columns.
    #[must_use]
    pub const fn columns(&self) -> Option<&CssValue> {
        self.columns.as_ref()
    }

    /// The value for the template areas.
    #[must_use]
    pub const fn areas(&self) -> Option<&CssValue> {
        self.areas.as_ref()
    }

    /// Canonical CSS text of the shorthand.
    ///
    /// A keyword-only sub-value (e.g. `none`) means the template is
    /// unconstrained, which overrides every other field: the whole value
    /// serializes as `none`. Otherwise area labels are spliced into the row
    /// tuples and the columns text, when non-empty, follows a ` / `
    /// separator.
    #[must_use]
    pub fn css_text(&self) -> String {
        if self.is_unconstrained() {
            return keywords::NONE.to_string();
        }

        let rows = if let Some(areas) = &self.areas {
            self.rows_with_areas(areas).css_text()
        } else if let Some(rows) = &self.rows {
            rows.css_text()
        } else {
            String::new()
        };

        let columns = self.columns.as_ref().map(CssValue::css_text);
        match columns {
            Some(columns) if !columns.is_empty() => format!("{rows} / {columns}"),
            _ => rows,
        }
    }

    /// True when any sub-value is a keyword-only ("unconstrained") node.
    fn is_unconstrained(&self) -> bool {
        [&self.rows, &self.columns, &self.areas]
            .into_iter()
            .flatten()
            .any(|value| matches!(value, CssValue::Keyword(_)))
    }

    /// Splice each area label into its row tuple at position 1, after the
    /// leading line-name/size token.
    ///
    /// Fail-soft: a row that is not a tuple, or a row index with no matching
    /// area, contributes nothing to the output. The drop is reported on the
    /// warning channel only; serialization still succeeds.
    fn rows_with_areas(&self, areas: &CssValue) -> TupleValue {
        let area_items = areas.as_tuple().map_or(&[][..], TupleValue::items);
        let row_items = self
            .rows
            .as_ref()
            .and_then(CssValue::as_tuple)
            .map_or(&[][..], TupleValue::items);

        let mut merged = Vec::with_capacity(row_items.len());

        for (index, row) in row_items.iter().enumerate() {
            let area = area_items.get(index);

            if let (Some(row_tuple), Some(area)) = (row.as_tuple(), area) {
                let mut items = row_tuple.items().to_vec();
                // An empty row tuple takes the label as its only element.
                let at = items.len().min(1);
                items.insert(at, area.clone());
                merged.push(CssValue::Tuple(TupleValue::new(items)));
            } else {
                let reason = if area.is_none() {
                    "it has no matching area"
                } else {
                    "it is not a tuple"
                };
                warn_once(
                    "CSS",
                    &format!("grid-template row {index} dropped from serialization: {reason}"),
                );
            }
        }

        TupleValue::new(merged)
    }

    /// Compute all three sub-values against `ctx`, producing a new template.
    ///
    /// # Errors
    ///
    /// Returns [`ComputeError::MissingSubvalue`] naming the first absent
    /// sub-value (checked in rows, columns, areas order). A template missing
    /// a sub-value can still serialize, but it cannot be computed.
    pub fn compute(&self, ctx: &ComputeContext) -> Result<Self, ComputeError> {
        let rows = Self::compute_field(self.rows.as_ref(), "rows", ctx)?;
        let columns = Self::compute_field(self.columns.as_ref(), "columns", ctx)?;
        let areas = Self::compute_field(self.areas.as_ref(), "areas", ctx)?;
        Ok(Self::new(Some(rows), Some(columns), Some(areas)))
    }

    fn compute_field(
        field: Option<&CssValue>,
        name: &'static str,
        ctx: &ComputeContext,
    ) -> Result<CssValue, ComputeError> {
        field
            .ok_or(ComputeError::MissingSubvalue { field: name })?
            .compute(ctx)
    }

    /// Field-wise structural equality.
    ///
    /// Absent sub-values equal only absent sub-values; no field is ever
    /// dereferenced unguarded.
    #[must_use]
    pub fn structurally_equals(&self, other: &Self) -> bool {
        structurally_equal_opt(self.areas.as_ref(), other.areas.as_ref())
            && structurally_equal_opt(self.columns.as_ref(), other.columns.as_ref())
            && structurally_equal_opt(self.rows.as_ref(), other.rows.as_ref())
    }
}
