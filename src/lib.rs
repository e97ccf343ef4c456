//! tabgrid - interaction and styling core for a typed, pinnable data grid
//!
//! Given a column schema and a row dataset, this crate computes the
//! pin-aware column layout, resolves per-cell display text and style from
//! logical data types, maps a light/dark preference into a concrete style
//! table, and runs the pointer/keyboard interaction state machine
//! (tooltips, context menus, clipboard copy, selection). The actual
//! virtualized painting belongs to a host grid engine, which this crate
//! configures through [`directives`] and feeds events into through
//! [`GridMsg`].

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod controller;
pub mod directives;
pub mod format;
pub mod layout;
pub mod messages;
pub mod schema;
pub mod subscription;
pub mod theme;
pub mod tracing;
pub mod value;

// Re-export commonly used types
pub use clipboard::{ClipboardService, SystemClipboard};
pub use commands::Cmd;
pub use config::GridConfig;
pub use controller::{GridController, OverlayState};
pub use directives::{build_directives, ColumnDirective};
pub use format::{format_cell, FormatContext, FormattedCell, StyleHints};
pub use layout::{build_layout, frozen_counts, PinState};
pub use messages::{CellRect, GridMsg, MenuCommand};
pub use schema::{Column, LogicalType};
pub use subscription::PointerChannel;
pub use theme::{CellRole, Color, StyleTable, ThemeMode};
pub use value::{record_from_json, CellValue, Record};
