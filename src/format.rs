//! Type-directed cell formatting
//!
//! Converts raw cell values into display text plus style hints. Formatting
//! is total: a value that cannot be converted under its declared logical
//! type falls back to its natural string form and the fault is logged, so
//! one malformed cell never aborts a paint pass.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::schema::LogicalType;
use crate::value::CellValue;

/// Text shown for null / missing values
pub const NULL_TEXT: &str = "<null>";

/// Host-supplied display preferences for one render pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatContext {
    /// Apply fixed-point beautification to float columns
    pub beautify: bool,
    /// Fraction digits for beautified floats
    pub precision: Option<u32>,
    /// Rows and columns have swapped semantic roles
    pub transpose: bool,
}

/// Style hints attached to a formatted cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleHints {
    pub align_right: bool,
    pub muted: bool,
}

/// A formatted cell: display text plus style hints
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedCell {
    pub text: String,
    pub hints: StyleHints,
}

/// Format one cell under its column's logical type
///
/// Never fails: conversion faults are logged and the raw value's natural
/// string form is used instead. Numeric logical types are right-aligned
/// regardless of which rule produced the text.
pub fn format_cell(value: &CellValue, logical_type: LogicalType, ctx: &FormatContext) -> FormattedCell {
    let mut hints = StyleHints {
        align_right: logical_type.is_numeric(),
        muted: false,
    };

    if value.is_null() {
        hints.muted = true;
        return FormattedCell {
            text: NULL_TEXT.to_string(),
            hints,
        };
    }

    let text = match try_format(value, logical_type, ctx) {
        Ok(text) => text,
        Err(fault) => {
            tracing::warn!(%fault, %logical_type, "cell formatting failed, falling back to raw value");
            value.natural_string()
        }
    };

    FormattedCell { text, hints }
}

fn try_format(
    value: &CellValue,
    logical_type: LogicalType,
    ctx: &FormatContext,
) -> Result<String, String> {
    match logical_type {
        LogicalType::Decimal { scale } => Ok(format_decimal(&value.natural_string(), scale)),
        LogicalType::Date => Ok(to_datetime(value)?.format("%Y-%m-%d").to_string()),
        LogicalType::Timestamp => Ok(to_datetime(value)?.format("%Y-%m-%d %H:%M:%S").to_string()),
        LogicalType::Float => {
            if let (true, Some(precision)) = (ctx.beautify, ctx.precision) {
                let n = value
                    .as_f64()
                    .ok_or_else(|| format!("value has no numeric reading: {:?}", value))?;
                Ok(format!("{:.*}", precision as usize, n))
            } else {
                Ok(value.natural_string())
            }
        }
        _ => Ok(value.natural_string()),
    }
}

/// Reconstruct a decimal from its unscaled integer text
///
/// Zero-pads the magnitude to at least `scale + 1` digits, then inserts the
/// point `scale` digits from the end, so `"5"` at scale 2 becomes `"0.05"`.
/// Scale 0 keeps the point insertion and yields a trailing point.
fn format_decimal(unscaled: &str, scale: u32) -> String {
    let scale = scale as usize;
    let (sign, digits) = match unscaled.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", unscaled),
    };
    let padded = if digits.chars().count() < scale + 1 {
        format!("{:0>width$}", digits, width = scale + 1)
    } else {
        digits.to_string()
    };
    let split = padded.chars().count() - scale;
    let head: String = padded.chars().take(split).collect();
    let tail: String = padded.chars().skip(split).collect();
    format!("{}{}.{}", sign, head, tail)
}

/// Interpret epoch milliseconds or ISO-8601-ish text as a UTC datetime
fn to_datetime(value: &CellValue) -> Result<NaiveDateTime, String> {
    match value {
        CellValue::Int(ms) => from_epoch_millis(*ms),
        CellValue::Float(ms) => from_epoch_millis(*ms as i64),
        CellValue::Text(s) => parse_datetime_text(s),
        other => Err(format!("not a date value: {:?}", other)),
    }
}

fn from_epoch_millis(ms: i64) -> Result<NaiveDateTime, String> {
    DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| format!("epoch milliseconds out of range: {}", ms))
}

fn parse_datetime_text(s: &str) -> Result<NaiveDateTime, String> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d.and_time(NaiveTime::MIN));
    }
    Err(format!("unrecognized date text: {:?}", s))
}
