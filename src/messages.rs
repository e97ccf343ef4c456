//! Message types for the grid interaction layer
//!
//! All pointer and menu events from the host grid engine flow in as
//! [`GridMsg`] values; every overlay, selection, and pin change happens in
//! response to one of these.

use crate::value::CellValue;

/// Geometry of a cell in host pixels (tooltip anchoring)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Context-menu entries the grid can offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Copy the column's field name
    CopyField,
    /// Pin the column to the left edge
    PinToLeft,
    /// Pin the column to the right edge
    PinToRight,
    /// Remove all pins
    PinToClear,
    /// Copy the selected cells using their formatted text
    Copy,
    /// Copy the selected cells using their raw values
    CopyWithText,
}

impl MenuCommand {
    /// Stable key exchanged with the host menu widget
    pub fn key(self) -> &'static str {
        match self {
            MenuCommand::CopyField => "copy-field",
            MenuCommand::PinToLeft => "pin-to-left",
            MenuCommand::PinToRight => "pin-to-right",
            MenuCommand::PinToClear => "pin-to-clear",
            MenuCommand::Copy => "copy",
            MenuCommand::CopyWithText => "copy-with-text",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "copy-field" => Some(MenuCommand::CopyField),
            "pin-to-left" => Some(MenuCommand::PinToLeft),
            "pin-to-right" => Some(MenuCommand::PinToRight),
            "pin-to-clear" => Some(MenuCommand::PinToClear),
            "copy" => Some(MenuCommand::Copy),
            "copy-with-text" => Some(MenuCommand::CopyWithText),
            _ => None,
        }
    }

    /// Human-readable menu label
    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::CopyField => "Copy Field Name",
            MenuCommand::PinToLeft => "Pin to left",
            MenuCommand::PinToRight => "Pin to right",
            MenuCommand::PinToClear => "Clear pinned",
            MenuCommand::Copy => "Copy",
            MenuCommand::CopyWithText => "Copy with text",
        }
    }

    /// Commands offered on header cells
    pub fn header_set() -> &'static [MenuCommand] {
        &[
            MenuCommand::CopyField,
            MenuCommand::PinToLeft,
            MenuCommand::PinToRight,
            MenuCommand::PinToClear,
        ]
    }

    /// Commands offered on body cells
    pub fn body_set() -> &'static [MenuCommand] {
        &[MenuCommand::Copy, MenuCommand::CopyWithText]
    }
}

/// Events delivered by the host grid engine
///
/// Coordinates are grid coordinates: row 0 is the header row and column 0
/// is the index column (roles swap in transpose mode).
#[derive(Debug, Clone, PartialEq)]
pub enum GridMsg {
    /// Pointer entered a cell
    HoverCell {
        row: usize,
        col: usize,
        anchor: CellRect,
    },
    /// Right-click on a cell
    ContextMenuCell { row: usize, col: usize },
    /// Primary click on a cell; the engine supplies the raw value
    PrimaryClickCell {
        row: usize,
        col: usize,
        value: CellValue,
    },
    /// Selection anchor moved to a cell
    SelectCell { row: usize, col: usize },
    /// Selection extended to a cell (shift-click or drag)
    ExtendSelection { row: usize, col: usize },
    /// A context-menu entry was chosen for a column field
    MenuCommand { command: MenuCommand, field: String },
    /// Pointer-down/click/dblclick/contextmenu anywhere in the document
    GlobalPointer,
}
