//! Per-column rendering directives
//!
//! The contract the host grid engine consumes each paint: one directive per
//! layout column carrying the title, sortability, and the format/style
//! strategies for that column's logical type. Style resolution dispatches
//! on the stored type rather than on callbacks embedded in configuration.

use crate::format::{format_cell, FormatContext, StyleHints};
use crate::layout::{build_layout, PinState};
use crate::schema::{Column, LogicalType};
use crate::value::CellValue;

/// Rendering contract for one visible column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDirective {
    pub key: String,
    pub title: String,
    /// The host engine may offer sorting on every column
    pub sortable: bool,
    pub logical_type: LogicalType,
    ctx: FormatContext,
}

impl ColumnDirective {
    /// Display text for one of this column's cells
    pub fn format(&self, value: &CellValue) -> String {
        format_cell(value, self.logical_type, &self.ctx).text
    }

    /// Style hints for one of this column's cells
    pub fn style(&self, value: &CellValue) -> StyleHints {
        format_cell(value, self.logical_type, &self.ctx).hints
    }
}

/// Build directives for every column, in layout order
pub fn build_directives(
    schema: &[Column],
    pin: &PinState,
    ctx: &FormatContext,
) -> Vec<ColumnDirective> {
    build_layout(schema, pin)
        .into_iter()
        .map(|col| ColumnDirective {
            key: col.key.clone(),
            title: col.display_name.clone(),
            sortable: true,
            logical_type: col.logical_type,
            ctx: *ctx,
        })
        .collect()
}
